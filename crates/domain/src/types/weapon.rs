//! Weapon categories and properties.

vocabulary! {
    pub enum WeaponType ("weapon type") {
        SimpleMelee => ("SIMPLE_MELEE", "Simple melee weapon"),
        SimpleRanged => ("SIMPLE_RANGED", "Simple ranged weapon"),
        MartialMelee => ("MARTIAL_MELEE", "Martial melee weapon"),
        MartialRanged => ("MARTIAL_RANGED", "Martial ranged weapon"),
    }
}

impl WeaponType {
    pub fn is_ranged(&self) -> bool {
        matches!(self, WeaponType::SimpleRanged | WeaponType::MartialRanged)
    }

    pub fn is_martial(&self) -> bool {
        matches!(self, WeaponType::MartialMelee | WeaponType::MartialRanged)
    }
}

vocabulary! {
    pub enum WeaponProperty ("weapon property") {
        Ammunition => ("AMMUNITION", "Ammunition"),
        Finesse => ("FINESSE", "Finesse"),
        Heavy => ("HEAVY", "Heavy"),
        Light => ("LIGHT", "Light"),
        Loading => ("LOADING", "Loading"),
        Reach => ("REACH", "Reach"),
        Special => ("SPECIAL", "Special"),
        Thrown => ("THROWN", "Thrown"),
        TwoHanded => ("TWO_HANDED", "Two-handed"),
        Versatile => ("VERSATILE", "Versatile"),
    }
}

impl WeaponProperty {
    /// Properties that only make sense with a range profile.
    pub fn requires_range(&self) -> bool {
        matches!(self, WeaponProperty::Ammunition | WeaponProperty::Thrown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_type_predicates() {
        assert!(WeaponType::MartialRanged.is_ranged());
        assert!(WeaponType::MartialRanged.is_martial());
        assert!(!WeaponType::SimpleMelee.is_ranged());
    }

    #[test]
    fn property_round_trip() {
        for property in WeaponProperty::ALL {
            assert_eq!(WeaponProperty::parse(&property.to_string()), Ok(*property));
        }
        assert_eq!(WeaponProperty::parse("two_handed"), Ok(WeaponProperty::TwoHanded));
        assert!(WeaponProperty::parse("not-a-real-value").expect_err("unknown").is_invalid_data());
    }

    #[test]
    fn weapon_type_round_trip() {
        for weapon_type in WeaponType::ALL {
            assert_eq!(WeaponType::parse(&weapon_type.to_string()), Ok(*weapon_type));
        }
        assert!(WeaponType::parse("not-a-real-value").expect_err("unknown").is_invalid_data());
    }
}
