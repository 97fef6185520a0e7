//! Ability modifiers.

vocabulary! {
    /// The six abilities a character's modifiers derive from.
    pub enum Modifier ("modifier") {
        Strength => ("STRENGTH", "Strength"),
        Dexterity => ("DEXTERITY", "Dexterity"),
        Constitution => ("CONSTITUTION", "Constitution"),
        Intelligence => ("INTELLIGENCE", "Intelligence"),
        Wisdom => ("WISDOM", "Wisdom"),
        Charisma => ("CHARISMA", "Charisma"),
    }
}

impl Modifier {
    /// Three-letter abbreviation used on character sheets.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Modifier::Strength => "STR",
            Modifier::Dexterity => "DEX",
            Modifier::Constitution => "CON",
            Modifier::Intelligence => "INT",
            Modifier::Wisdom => "WIS",
            Modifier::Charisma => "CHA",
        }
    }
}
