//! Schools of magic.

vocabulary! {
    pub enum SpellSchool ("spell school") {
        Abjuration => ("ABJURATION", "Abjuration"),
        Conjuration => ("CONJURATION", "Conjuration"),
        Divination => ("DIVINATION", "Divination"),
        Enchantment => ("ENCHANTMENT", "Enchantment"),
        Evocation => ("EVOCATION", "Evocation"),
        Illusion => ("ILLUSION", "Illusion"),
        Necromancy => ("NECROMANCY", "Necromancy"),
        Transmutation => ("TRANSMUTATION", "Transmutation"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display() {
        for school in SpellSchool::ALL {
            assert_eq!(SpellSchool::parse(&school.to_string()), Ok(*school));
        }
        assert!(SpellSchool::parse("chronomancy").expect_err("unknown").is_invalid_data());
    }
}
