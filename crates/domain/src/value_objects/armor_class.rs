//! Armor class granted by a piece of armor.

use serde::Serialize;

use crate::common::ensure_range;
use crate::error::DomainError;
use crate::types::Modifier;

/// Base AC plus an optional ability modifier, optionally capped.
///
/// # Invariants
///
/// - `base_class` is in `1..=20`
/// - `max_modifier_bonus`, when present, is in `1..=10` and requires `modifier`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorClass {
    base_class: u8,
    modifier: Option<Modifier>,
    max_modifier_bonus: Option<u8>,
}

impl ArmorClass {
    pub fn new(
        base_class: u8,
        modifier: Option<Modifier>,
        max_modifier_bonus: Option<u8>,
    ) -> Result<Self, DomainError> {
        ensure_range(base_class, 1, 20, "Base armor class")?;
        if let Some(max_bonus) = max_modifier_bonus {
            ensure_range(max_bonus, 1, 10, "Max modifier bonus")?;
            if modifier.is_none() {
                return Err(DomainError::invalid_data(
                    "Max modifier bonus requires a modifier",
                ));
            }
        }
        Ok(Self {
            base_class,
            modifier,
            max_modifier_bonus,
        })
    }

    /// Flat armor class with no ability contribution.
    pub fn flat(base_class: u8) -> Result<Self, DomainError> {
        Self::new(base_class, None, None)
    }

    pub fn base_class(&self) -> u8 {
        self.base_class
    }

    pub fn modifier(&self) -> Option<Modifier> {
        self.modifier
    }

    pub fn max_modifier_bonus(&self) -> Option<u8> {
        self.max_modifier_bonus
    }

    /// AC for a wearer with the given modifier value.
    pub fn total(&self, modifier_value: i8) -> i16 {
        let base = i16::from(self.base_class);
        if self.modifier.is_none() {
            return base;
        }
        let bonus = match self.max_modifier_bonus {
            Some(max) => modifier_value.min(max as i8),
            None => modifier_value,
        };
        base + i16::from(bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_class_bounds() {
        assert!(ArmorClass::flat(1).is_ok());
        assert!(ArmorClass::flat(20).is_ok());
        assert!(ArmorClass::flat(0).is_err());
        assert!(ArmorClass::flat(21).is_err());
    }

    #[test]
    fn max_bonus_requires_modifier() {
        let err = ArmorClass::new(12, None, Some(2)).expect_err("no modifier");
        assert!(err.is_invalid_data());
        assert!(ArmorClass::new(12, Some(Modifier::Dexterity), Some(2)).is_ok());
    }

    #[test]
    fn max_bonus_bounds() {
        assert!(ArmorClass::new(12, Some(Modifier::Dexterity), Some(0)).is_err());
        assert!(ArmorClass::new(12, Some(Modifier::Dexterity), Some(10)).is_ok());
        assert!(ArmorClass::new(12, Some(Modifier::Dexterity), Some(11)).is_err());
    }

    #[test]
    fn total_caps_bonus() {
        let medium = ArmorClass::new(14, Some(Modifier::Dexterity), Some(2)).expect("valid");
        assert_eq!(medium.total(4), 16);
        assert_eq!(medium.total(-1), 13);
        let heavy = ArmorClass::flat(18).expect("valid");
        assert_eq!(heavy.total(3), 18);
    }
}
