//! Dice value object and parsing
//!
//! Supports formulas like "1d8", "2d6", "d20". Damage bonuses live on
//! `WeaponDamage`, so a `Dice` never carries a flat modifier.

use serde::Serialize;
use std::fmt;

use crate::error::DomainError;
use crate::types::DiceType;

/// A pool of identical dice, e.g. "2d6".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dice {
    count: u8,
    dice_type: DiceType,
}

impl Dice {
    /// Create a new dice pool.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidData` if `count` is zero.
    pub fn new(count: u8, dice_type: DiceType) -> Result<Self, DomainError> {
        if count == 0 {
            return Err(DomainError::invalid_data("Dice count must be at least 1"));
        }
        Ok(Self { count, dice_type })
    }

    /// Parse a formula string like "1d8", "2d6", "d20".
    ///
    /// Supported formats:
    /// - "XdY" - X dice of size Y
    /// - "dY" - one die of size Y (shorthand)
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(DomainError::invalid_data("Empty dice formula"));
        }

        let d_pos = input.find('d').ok_or_else(|| {
            DomainError::invalid_data(format!("Missing 'd' separator in '{}'", input))
        })?;

        let count_str = &input[..d_pos];
        let count: u8 = if count_str.is_empty() {
            1 // "d20" means "1d20"
        } else {
            count_str.parse().map_err(|_| {
                DomainError::invalid_data(format!("Invalid dice count: '{}'", count_str))
            })?
        };

        let sides_str = &input[d_pos + 1..];
        let sides: u16 = sides_str.parse().map_err(|_| {
            DomainError::invalid_data(format!("Invalid die size: '{}'", sides_str))
        })?;
        let dice_type = DiceType::from_sides(sides)
            .ok_or_else(|| DomainError::invalid_data(format!("Unsupported die: d{}", sides)))?;

        Self::new(count, dice_type)
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn dice_type(&self) -> DiceType {
        self.dice_type
    }

    /// Highest possible total.
    pub fn max_value(&self) -> u32 {
        u32::from(self.count) * u32::from(self.dice_type.sides())
    }

    /// Expected total of a roll.
    pub fn avg_value(&self) -> f64 {
        f64::from(self.count) * (f64::from(self.dice_type.sides()) + 1.0) / 2.0
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.dice_type.sides())
    }
}
