//! Damage types.

vocabulary! {
    pub enum DamageType ("damage type") {
        Acid => ("ACID", "Acid"),
        Bludgeoning => ("BLUDGEONING", "Bludgeoning"),
        Cold => ("COLD", "Cold"),
        Fire => ("FIRE", "Fire"),
        Force => ("FORCE", "Force"),
        Lightning => ("LIGHTNING", "Lightning"),
        Necrotic => ("NECROTIC", "Necrotic"),
        Piercing => ("PIERCING", "Piercing"),
        Poison => ("POISON", "Poison"),
        Psychic => ("PSYCHIC", "Psychic"),
        Radiant => ("RADIANT", "Radiant"),
        Slashing => ("SLASHING", "Slashing"),
        Thunder => ("THUNDER", "Thunder"),
    }
}

impl DamageType {
    /// Damage types dealt by mundane weapons.
    pub fn is_physical(&self) -> bool {
        matches!(
            self,
            DamageType::Bludgeoning | DamageType::Piercing | DamageType::Slashing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display() {
        for damage_type in DamageType::ALL {
            assert_eq!(DamageType::parse(&damage_type.to_string()), Ok(*damage_type));
        }
        assert!(DamageType::parse("not-a-real-value").expect_err("unknown").is_invalid_data());
    }

    #[test]
    fn physical_damage() {
        assert!(DamageType::Slashing.is_physical());
        assert!(!DamageType::Fire.is_physical());
    }
}
