//! Class level entity - the per-level progression table row of a class.

use crate::common::{ensure_range, replace};
use crate::error::DomainError;
use crate::ids::{CharacterClassId, ClassLevelId};
use crate::value_objects::Dice;

/// One row of a class's progression table.
///
/// # Invariants
///
/// - `level` is in `1..=20` and unique per class (checked by the use case)
/// - `proficiency_bonus` is in `2..=6`
/// - `dice` is an optional class resource die (e.g. a monk's martial arts die)
#[derive(Debug, Clone)]
pub struct ClassLevel {
    id: ClassLevelId,
    class_id: CharacterClassId,
    level: u8,
    proficiency_bonus: u8,
    dice: Option<Dice>,
}

impl ClassLevel {
    pub fn new(
        id: ClassLevelId,
        class_id: CharacterClassId,
        level: u8,
        proficiency_bonus: u8,
        dice: Option<Dice>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            class_id,
            level: validate_level(level)?,
            proficiency_bonus: validate_proficiency_bonus(proficiency_bonus)?,
            dice,
        })
    }

    pub fn id(&self) -> ClassLevelId {
        self.id
    }

    pub fn class_id(&self) -> CharacterClassId {
        self.class_id
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn proficiency_bonus(&self) -> u8 {
        self.proficiency_bonus
    }

    pub fn dice(&self) -> Option<Dice> {
        self.dice
    }

    pub fn new_level(&mut self, level: u8) -> Result<(), DomainError> {
        replace(&mut self.level, validate_level(level)?, "Level")
    }

    pub fn new_proficiency_bonus(&mut self, proficiency_bonus: u8) -> Result<(), DomainError> {
        let proficiency_bonus = validate_proficiency_bonus(proficiency_bonus)?;
        replace(&mut self.proficiency_bonus, proficiency_bonus, "Proficiency bonus")
    }

    pub fn new_dice(&mut self, dice: Option<Dice>) -> Result<(), DomainError> {
        replace(&mut self.dice, dice, "Dice")
    }
}

impl_identity!(ClassLevel, ClassLevelId);

fn validate_level(level: u8) -> Result<u8, DomainError> {
    ensure_range(level, 1, 20, "Level")?;
    Ok(level)
}

fn validate_proficiency_bonus(bonus: u8) -> Result<u8, DomainError> {
    ensure_range(bonus, 2, 6, "Proficiency bonus")?;
    Ok(bonus)
}
