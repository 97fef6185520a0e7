//! Race entity (playable ancestry).

use crate::common::{ensure_unique, replace, replace_set};
use crate::error::DomainError;
use crate::ids::{CreatureSizeId, CreatureTypeId, RaceId, SourceId};
use crate::types::Modifier;
use crate::value_objects::{Description, Length, ModifierBonus, Name};

/// A playable race.
///
/// # Invariants
///
/// - `speed` is greater than zero
/// - `increase_modifiers` adjusts each modifier at most once
#[derive(Debug, Clone)]
pub struct Race {
    id: RaceId,
    name: Name,
    description: Description,
    creature_type_id: CreatureTypeId,
    creature_size_id: CreatureSizeId,
    speed: Length,
    increase_modifiers: Vec<ModifierBonus>,
    source_id: SourceId,
}

impl Race {
    pub fn new(
        id: RaceId,
        name: impl Into<String>,
        description: impl Into<String>,
        creature_type_id: CreatureTypeId,
        creature_size_id: CreatureSizeId,
        speed: Length,
        increase_modifiers: Vec<ModifierBonus>,
        source_id: SourceId,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            description: Description::new(description)?,
            creature_type_id,
            creature_size_id,
            speed: validate_speed(speed)?,
            increase_modifiers: validate_increase_modifiers(increase_modifiers)?,
            source_id,
        })
    }

    #[inline]
    pub fn id(&self) -> RaceId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &Description {
        &self.description
    }

    #[inline]
    pub fn creature_type_id(&self) -> CreatureTypeId {
        self.creature_type_id
    }

    #[inline]
    pub fn creature_size_id(&self) -> CreatureSizeId {
        self.creature_size_id
    }

    /// Base walking speed.
    #[inline]
    pub fn speed(&self) -> Length {
        self.speed
    }

    #[inline]
    pub fn increase_modifiers(&self) -> &[ModifierBonus] {
        &self.increase_modifiers
    }

    #[inline]
    pub fn source_id(&self) -> SourceId {
        self.source_id
    }

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }

    pub fn new_creature_type_id(&mut self, id: CreatureTypeId) -> Result<(), DomainError> {
        replace(&mut self.creature_type_id, id, "Creature type")
    }

    pub fn new_creature_size_id(&mut self, id: CreatureSizeId) -> Result<(), DomainError> {
        replace(&mut self.creature_size_id, id, "Creature size")
    }

    pub fn new_speed(&mut self, speed: Length) -> Result<(), DomainError> {
        replace(&mut self.speed, validate_speed(speed)?, "Speed")
    }

    pub fn new_increase_modifiers(
        &mut self,
        increase_modifiers: Vec<ModifierBonus>,
    ) -> Result<(), DomainError> {
        let increase_modifiers = validate_increase_modifiers(increase_modifiers)?;
        replace_set(&mut self.increase_modifiers, increase_modifiers, "Increase modifiers")
    }

    pub fn new_source_id(&mut self, source_id: SourceId) -> Result<(), DomainError> {
        replace(&mut self.source_id, source_id, "Source")
    }
}

impl_identity!(Race, RaceId);

fn validate_speed(speed: Length) -> Result<Length, DomainError> {
    if speed.is_zero() {
        return Err(DomainError::invalid_data("Speed must be greater than zero"));
    }
    Ok(speed)
}

fn validate_increase_modifiers(
    increase_modifiers: Vec<ModifierBonus>,
) -> Result<Vec<ModifierBonus>, DomainError> {
    let modifiers: Vec<Modifier> = increase_modifiers.iter().map(|m| m.modifier()).collect();
    ensure_unique(&modifiers, "Increase modifiers")?;
    Ok(increase_modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LengthUnit;

    fn feet(value: f64) -> Length {
        Length::new(value, LengthUnit::Ft).expect("valid length")
    }

    fn bonus(modifier: Modifier, value: i8) -> ModifierBonus {
        ModifierBonus::new(modifier, value).expect("valid bonus")
    }

    fn dwarf(increase_modifiers: Vec<ModifierBonus>) -> Result<Race, DomainError> {
        Race::new(
            RaceId::new(),
            "Dwarf",
            "Bold and hardy",
            CreatureTypeId::new(),
            CreatureSizeId::new(),
            feet(25.0),
            increase_modifiers,
            SourceId::new(),
        )
    }

    #[test]
    fn increase_modifiers_unique_by_modifier() {
        assert!(dwarf(vec![bonus(Modifier::Constitution, 2), bonus(Modifier::Wisdom, 1)]).is_ok());
        let err = dwarf(vec![
            bonus(Modifier::Constitution, 2),
            bonus(Modifier::Constitution, 1),
        ])
        .expect_err("duplicate modifier");
        assert!(err.is_invalid_data());
    }

    #[test]
    fn speed_must_be_positive() {
        let mut race = dwarf(vec![]).expect("valid race");
        assert!(race.new_speed(feet(0.0)).expect_err("zero").is_invalid_data());
        assert!(race.new_speed(feet(25.0)).expect_err("same").is_idempotent());
        race.new_speed(feet(30.0)).expect("changed");
        assert_eq!(race.speed().in_ft(), 30.0);
    }
}
