//! Weapon damage and range profiles.

use serde::Serialize;
use std::fmt;

use crate::error::DomainError;
use crate::types::DamageType;
use crate::value_objects::{Dice, Length};

/// Damage dealt by a weapon hit: dice, a flat bonus and the damage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponDamage {
    dice: Dice,
    damage_type: DamageType,
    bonus_damage: u8,
}

impl WeaponDamage {
    pub fn new(dice: Dice, damage_type: DamageType, bonus_damage: u8) -> Self {
        Self {
            dice,
            damage_type,
            bonus_damage,
        }
    }

    pub fn dice(&self) -> Dice {
        self.dice
    }

    pub fn damage_type(&self) -> DamageType {
        self.damage_type
    }

    pub fn bonus_damage(&self) -> u8 {
        self.bonus_damage
    }

    pub fn max_damage(&self) -> u32 {
        self.dice.max_value() + u32::from(self.bonus_damage)
    }
}

impl fmt::Display for WeaponDamage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bonus_damage > 0 {
            write!(f, "{}+{} {}", self.dice, self.bonus_damage, self.damage_type)
        } else {
            write!(f, "{} {}", self.dice, self.damage_type)
        }
    }
}

/// Normal and long range of a ranged or thrown weapon.
///
/// # Invariants
///
/// - `normal` is greater than zero
/// - `long` is not shorter than `normal`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponRange {
    normal: Length,
    long: Length,
}

impl WeaponRange {
    pub fn new(normal: Length, long: Length) -> Result<Self, DomainError> {
        if normal.is_zero() {
            return Err(DomainError::invalid_data("Normal range must be greater than zero"));
        }
        if long < normal {
            return Err(DomainError::invalid_data(format!(
                "Long range ({}) cannot be shorter than normal range ({})",
                long, normal
            )));
        }
        Ok(Self { normal, long })
    }

    pub fn normal(&self) -> Length {
        self.normal
    }

    pub fn long(&self) -> Length {
        self.long
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiceType, LengthUnit};

    fn feet(value: f64) -> Length {
        Length::new(value, LengthUnit::Ft).expect("valid length")
    }

    #[test]
    fn damage_display_and_max() {
        let dice = Dice::new(1, DiceType::D8).expect("valid dice");
        let damage = WeaponDamage::new(dice, DamageType::Slashing, 1);
        assert_eq!(damage.to_string(), "1d8+1 SLASHING");
        assert_eq!(damage.max_damage(), 9);
    }

    #[test]
    fn range_ordering() {
        assert!(WeaponRange::new(feet(80.0), feet(320.0)).is_ok());
        assert!(WeaponRange::new(feet(30.0), feet(30.0)).is_ok());
        assert!(WeaponRange::new(feet(120.0), feet(60.0)).is_err());
        assert!(WeaponRange::new(feet(0.0), feet(60.0)).is_err());
    }
}
