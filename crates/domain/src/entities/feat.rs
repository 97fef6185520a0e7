//! Feat entity - optional character abilities with prerequisites.

use crate::common::{ensure_unique, replace, replace_set};
use crate::error::DomainError;
use crate::ids::{FeatId, SourceId};
use crate::types::{ArmorType, Modifier};
use crate::value_objects::{Description, ModifierRequirement, Name};

/// A feat.
///
/// Prerequisites are expressed by `caster` (must be able to cast at least one
/// spell), `required_armor_types` (proficiency) and `required_modifiers`
/// (minimum ability scores). `increase_modifiers` lists the abilities the feat
/// lets the character raise.
#[derive(Debug, Clone)]
pub struct Feat {
    id: FeatId,
    name: Name,
    description: Description,
    caster: bool,
    required_armor_types: Vec<ArmorType>,
    required_modifiers: Vec<ModifierRequirement>,
    increase_modifiers: Vec<Modifier>,
    source_id: SourceId,
}

impl Feat {
    pub fn new(
        id: FeatId,
        name: impl Into<String>,
        description: impl Into<String>,
        caster: bool,
        required_armor_types: Vec<ArmorType>,
        required_modifiers: Vec<ModifierRequirement>,
        increase_modifiers: Vec<Modifier>,
        source_id: SourceId,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            description: Description::new(description)?,
            caster,
            required_armor_types: validate_armor_types(required_armor_types)?,
            required_modifiers: validate_required_modifiers(required_modifiers)?,
            increase_modifiers: validate_increase_modifiers(increase_modifiers)?,
            source_id,
        })
    }

    pub fn id(&self) -> FeatId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn caster(&self) -> bool {
        self.caster
    }

    pub fn required_armor_types(&self) -> &[ArmorType] {
        &self.required_armor_types
    }

    pub fn required_modifiers(&self) -> &[ModifierRequirement] {
        &self.required_modifiers
    }

    pub fn increase_modifiers(&self) -> &[Modifier] {
        &self.increase_modifiers
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

    pub fn new_caster(&mut self, caster: bool) -> Result<(), DomainError> {
        replace(&mut self.caster, caster, "Caster")
    }

    pub fn new_required_armor_types(
        &mut self,
        armor_types: Vec<ArmorType>,
    ) -> Result<(), DomainError> {
        let armor_types = validate_armor_types(armor_types)?;
        replace_set(&mut self.required_armor_types, armor_types, "Required armor types")
    }

    pub fn new_required_modifiers(
        &mut self,
        required_modifiers: Vec<ModifierRequirement>,
    ) -> Result<(), DomainError> {
        let required_modifiers = validate_required_modifiers(required_modifiers)?;
        replace_set(&mut self.required_modifiers, required_modifiers, "Required modifiers")
    }

    pub fn new_increase_modifiers(
        &mut self,
        increase_modifiers: Vec<Modifier>,
    ) -> Result<(), DomainError> {
        let increase_modifiers = validate_increase_modifiers(increase_modifiers)?;
        replace_set(&mut self.increase_modifiers, increase_modifiers, "Increase modifiers")
    }

    pub fn new_source_id(&mut self, source_id: SourceId) -> Result<(), DomainError> {
        replace(&mut self.source_id, source_id, "Source")
    }
}

impl_identity!(Feat, FeatId);

fn validate_armor_types(armor_types: Vec<ArmorType>) -> Result<Vec<ArmorType>, DomainError> {
    ensure_unique(&armor_types, "Required armor types")?;
    Ok(armor_types)
}

fn validate_required_modifiers(
    required_modifiers: Vec<ModifierRequirement>,
) -> Result<Vec<ModifierRequirement>, DomainError> {
    let modifiers: Vec<Modifier> = required_modifiers.iter().map(|r| r.modifier()).collect();
    ensure_unique(&modifiers, "Required modifiers")?;
    Ok(required_modifiers)
}

fn validate_increase_modifiers(modifiers: Vec<Modifier>) -> Result<Vec<Modifier>, DomainError> {
    ensure_unique(&modifiers, "Increase modifiers")?;
    Ok(modifiers)
}
