//! Character class entity (fighter, wizard, ...).

use crate::common::{
    ensure_non_empty_list, ensure_range, ensure_unique, replace, replace_set,
};
use crate::error::DomainError;
use crate::ids::{CharacterClassId, SourceId};
use crate::types::Modifier;
use crate::value_objects::{Description, Dice, Name};

/// A character class.
///
/// # Invariants
///
/// - `primary_modifiers` holds at least one modifier, no duplicates
/// - `saving_throws` holds one or two modifiers, no duplicates
/// - `hit_dice` is a single die (the per-level hit die)
#[derive(Debug, Clone)]
pub struct CharacterClass {
    id: CharacterClassId,
    name: Name,
    description: Description,
    primary_modifiers: Vec<Modifier>,
    saving_throws: Vec<Modifier>,
    hit_dice: Dice,
    source_id: SourceId,
}

impl CharacterClass {
    pub fn new(
        id: CharacterClassId,
        name: impl Into<String>,
        description: impl Into<String>,
        primary_modifiers: Vec<Modifier>,
        saving_throws: Vec<Modifier>,
        hit_dice: Dice,
        source_id: SourceId,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            description: Description::new(description)?,
            primary_modifiers: validate_primary_modifiers(primary_modifiers)?,
            saving_throws: validate_saving_throws(saving_throws)?,
            hit_dice: validate_hit_dice(hit_dice)?,
            source_id,
        })
    }

    pub fn id(&self) -> CharacterClassId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn primary_modifiers(&self) -> &[Modifier] {
        &self.primary_modifiers
    }

    pub fn saving_throws(&self) -> &[Modifier] {
        &self.saving_throws
    }

    pub fn hit_dice(&self) -> Dice {
        self.hit_dice
    }

    pub fn source_id(&self) -> SourceId {
        self.source_id
    }

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }

    pub fn new_primary_modifiers(
        &mut self,
        modifiers: Vec<Modifier>,
    ) -> Result<(), DomainError> {
        let modifiers = validate_primary_modifiers(modifiers)?;
        replace_set(&mut self.primary_modifiers, modifiers, "Primary modifiers")
    }

    pub fn new_saving_throws(
        &mut self,
        saving_throws: Vec<Modifier>,
    ) -> Result<(), DomainError> {
        let saving_throws = validate_saving_throws(saving_throws)?;
        replace_set(&mut self.saving_throws, saving_throws, "Saving throws")
    }

    pub fn new_hit_dice(&mut self, hit_dice: Dice) -> Result<(), DomainError> {
        replace(&mut self.hit_dice, validate_hit_dice(hit_dice)?, "Hit dice")
    }

    pub fn new_source_id(&mut self, source_id: SourceId) -> Result<(), DomainError> {
        replace(&mut self.source_id, source_id, "Source")
    }
}

impl_identity!(CharacterClass, CharacterClassId);

fn validate_primary_modifiers(
    modifiers: Vec<Modifier>,
) -> Result<Vec<Modifier>, DomainError> {
    ensure_non_empty_list(&modifiers, "Primary modifiers")?;
    ensure_unique(&modifiers, "Primary modifiers")?;
    Ok(modifiers)
}

fn validate_saving_throws(
    saving_throws: Vec<Modifier>,
) -> Result<Vec<Modifier>, DomainError> {
    ensure_range(saving_throws.len(), 1, 2, "Saving throw count")?;
    ensure_unique(&saving_throws, "Saving throws")?;
    Ok(saving_throws)
}

fn validate_hit_dice(hit_dice: Dice) -> Result<Dice, DomainError> {
    if hit_dice.count() != 1 {
        return Err(DomainError::invalid_data(format!(
            "Hit dice must be a single die, got {}",
            hit_dice
        )));
    }
    Ok(hit_dice)
}
