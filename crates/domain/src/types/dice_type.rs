//! Polyhedral dice.

vocabulary! {
    pub enum DiceType ("dice type") {
        D4 => ("D4", "d4"),
        D6 => ("D6", "d6"),
        D8 => ("D8", "d8"),
        D10 => ("D10", "d10"),
        D12 => ("D12", "d12"),
        D20 => ("D20", "d20"),
        D100 => ("D100", "d100"),
    }
}

impl DiceType {
    /// Number of faces on the die.
    pub fn sides(&self) -> u16 {
        match self {
            DiceType::D4 => 4,
            DiceType::D6 => 6,
            DiceType::D8 => 8,
            DiceType::D10 => 10,
            DiceType::D12 => 12,
            DiceType::D20 => 20,
            DiceType::D100 => 100,
        }
    }

    pub fn from_sides(sides: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.sides() == sides)
    }
}
