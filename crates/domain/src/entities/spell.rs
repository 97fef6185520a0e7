//! Spell entity.

use crate::common::{
    ensure_non_empty_list, ensure_range, ensure_unique, replace, replace_set,
};
use crate::error::DomainError;
use crate::ids::{CharacterClassId, MaterialComponentId, SourceId, SpellId, SubclassId};
use crate::types::{DamageType, Modifier, SpellSchool};
use crate::value_objects::{CastingTime, Description, GameTime, Length, Name, SpellComponents};

/// Highest spell level; level 0 is a cantrip.
pub const MAX_SPELL_LEVEL: u8 = 9;

/// A spell.
///
/// # Invariants
///
/// - `level` is in `0..=9`
/// - `class_ids` holds at least one class, no duplicates
/// - `subclass_ids`, `saving_throws` and `damage_types` hold no duplicates
/// - `components` is valid by construction (see [`SpellComponents`])
///
/// `duration` is `None` for instantaneous spells. `distance` of zero means
/// "self" or "touch", which the description spells out.
#[derive(Debug, Clone)]
pub struct Spell {
    id: SpellId,
    name: Name,
    description: Description,
    next_level_description: Option<Description>,
    level: u8,
    school: SpellSchool,
    class_ids: Vec<CharacterClassId>,
    subclass_ids: Vec<SubclassId>,
    casting_time: CastingTime,
    duration: Option<GameTime>,
    distance: Length,
    components: SpellComponents,
    saving_throws: Vec<Modifier>,
    damage_types: Vec<DamageType>,
    concentration: bool,
    ritual: bool,
    source_id: SourceId,
}

impl Spell {
    pub fn new(
        id: SpellId,
        name: impl Into<String>,
        description: impl Into<String>,
        next_level_description: Option<String>,
        level: u8,
        school: SpellSchool,
        class_ids: Vec<CharacterClassId>,
        subclass_ids: Vec<SubclassId>,
        casting_time: CastingTime,
        duration: Option<GameTime>,
        distance: Length,
        components: SpellComponents,
        saving_throws: Vec<Modifier>,
        damage_types: Vec<DamageType>,
        concentration: bool,
        ritual: bool,
        source_id: SourceId,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            description: Description::new(description)?,
            next_level_description: next_level_description
                .map(Description::new)
                .transpose()?,
            level: validate_level(level)?,
            school,
            class_ids: validate_class_ids(class_ids)?,
            subclass_ids: validate_subclass_ids(subclass_ids)?,
            casting_time,
            duration,
            distance,
            components,
            saving_throws: validate_saving_throws(saving_throws)?,
            damage_types: validate_damage_types(damage_types)?,
            concentration,
            ritual,
            source_id,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> SpellId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Effect when cast with a higher-level slot.
    pub fn next_level_description(&self) -> Option<&Description> {
        self.next_level_description.as_ref()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_cantrip(&self) -> bool {
        self.level == 0
    }

    pub fn school(&self) -> SpellSchool {
        self.school
    }

    pub fn class_ids(&self) -> &[CharacterClassId] {
        &self.class_ids
    }

    pub fn subclass_ids(&self) -> &[SubclassId] {
        &self.subclass_ids
    }

    pub fn casting_time(&self) -> CastingTime {
        self.casting_time
    }

    pub fn duration(&self) -> Option<GameTime> {
        self.duration
    }

    pub fn distance(&self) -> Length {
        self.distance
    }

    pub fn components(&self) -> &SpellComponents {
        &self.components
    }

    /// Material components this spell references.
    pub fn material_ids(&self) -> &[MaterialComponentId] {
        self.components.materials()
    }

    pub fn saving_throws(&self) -> &[Modifier] {
        &self.saving_throws
    }

    pub fn damage_types(&self) -> &[DamageType] {
        &self.damage_types
    }

    pub fn concentration(&self) -> bool {
        self.concentration
    }

    pub fn ritual(&self) -> bool {
        self.ritual
    }

    pub fn source_id(&self) -> SourceId {
        self.source_id
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }

    pub fn new_next_level_description(
        &mut self,
        description: Option<String>,
    ) -> Result<(), DomainError> {
        let description = description.map(Description::new).transpose()?;
        replace(&mut self.next_level_description, description, "Next level description")
    }

    pub fn new_level(&mut self, level: u8) -> Result<(), DomainError> {
        replace(&mut self.level, validate_level(level)?, "Level")
    }

    pub fn new_school(&mut self, school: SpellSchool) -> Result<(), DomainError> {
        replace(&mut self.school, school, "School")
    }

    pub fn new_class_ids(&mut self, class_ids: Vec<CharacterClassId>) -> Result<(), DomainError> {
        replace_set(&mut self.class_ids, validate_class_ids(class_ids)?, "Classes")
    }

    pub fn new_subclass_ids(&mut self, subclass_ids: Vec<SubclassId>) -> Result<(), DomainError> {
        let subclass_ids = validate_subclass_ids(subclass_ids)?;
        replace_set(&mut self.subclass_ids, subclass_ids, "Subclasses")
    }

    pub fn new_casting_time(&mut self, casting_time: CastingTime) -> Result<(), DomainError> {
        replace(&mut self.casting_time, casting_time, "Casting time")
    }

    pub fn new_duration(&mut self, duration: Option<GameTime>) -> Result<(), DomainError> {
        replace(&mut self.duration, duration, "Duration")
    }

    pub fn new_distance(&mut self, distance: Length) -> Result<(), DomainError> {
        replace(&mut self.distance, distance, "Distance")
    }

    pub fn new_components(&mut self, components: SpellComponents) -> Result<(), DomainError> {
        replace(&mut self.components, components, "Components")
    }

    pub fn new_saving_throws(&mut self, saving_throws: Vec<Modifier>) -> Result<(), DomainError> {
        let saving_throws = validate_saving_throws(saving_throws)?;
        replace_set(&mut self.saving_throws, saving_throws, "Saving throws")
    }

    pub fn new_damage_types(&mut self, damage_types: Vec<DamageType>) -> Result<(), DomainError> {
        let damage_types = validate_damage_types(damage_types)?;
        replace_set(&mut self.damage_types, damage_types, "Damage types")
    }

    pub fn new_concentration(&mut self, concentration: bool) -> Result<(), DomainError> {
        replace(&mut self.concentration, concentration, "Concentration")
    }

    pub fn new_ritual(&mut self, ritual: bool) -> Result<(), DomainError> {
        replace(&mut self.ritual, ritual, "Ritual")
    }

    pub fn new_source_id(&mut self, source_id: SourceId) -> Result<(), DomainError> {
        replace(&mut self.source_id, source_id, "Source")
    }
}

impl_identity!(Spell, SpellId);

fn validate_level(level: u8) -> Result<u8, DomainError> {
    ensure_range(level, 0, MAX_SPELL_LEVEL, "Spell level")?;
    Ok(level)
}

fn validate_class_ids(class_ids: Vec<CharacterClassId>) -> Result<Vec<CharacterClassId>, DomainError> {
    ensure_non_empty_list(&class_ids, "Classes")?;
    ensure_unique(&class_ids, "Classes")?;
    Ok(class_ids)
}

fn validate_subclass_ids(subclass_ids: Vec<SubclassId>) -> Result<Vec<SubclassId>, DomainError> {
    ensure_unique(&subclass_ids, "Subclasses")?;
    Ok(subclass_ids)
}

fn validate_saving_throws(saving_throws: Vec<Modifier>) -> Result<Vec<Modifier>, DomainError> {
    ensure_unique(&saving_throws, "Saving throws")?;
    Ok(saving_throws)
}

fn validate_damage_types(damage_types: Vec<DamageType>) -> Result<Vec<DamageType>, DomainError> {
    ensure_unique(&damage_types, "Damage types")?;
    Ok(damage_types)
}
