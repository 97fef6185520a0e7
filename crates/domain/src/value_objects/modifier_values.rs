//! Modifier-bound values used by races and feats.

use serde::Serialize;

use crate::common::ensure_range;
use crate::error::DomainError;
use crate::types::Modifier;

/// Minimum ability score required, e.g. "Strength 13".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierRequirement {
    modifier: Modifier,
    min_value: u8,
}

impl ModifierRequirement {
    pub fn new(modifier: Modifier, min_value: u8) -> Result<Self, DomainError> {
        ensure_range(min_value, 1, 30, "Minimum ability score")?;
        Ok(Self {
            modifier,
            min_value,
        })
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn min_value(&self) -> u8 {
        self.min_value
    }
}

/// Ability score adjustment, e.g. "Dexterity +2".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierBonus {
    modifier: Modifier,
    bonus: i8,
}

impl ModifierBonus {
    pub fn new(modifier: Modifier, bonus: i8) -> Result<Self, DomainError> {
        ensure_range(bonus, -5, 5, "Ability score bonus")?;
        if bonus == 0 {
            return Err(DomainError::invalid_data("Ability score bonus cannot be zero"));
        }
        Ok(Self { modifier, bonus })
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn bonus(&self) -> i8 {
        self.bonus
    }
}
