//! Creature taxonomy: types (humanoid, fey, ...) and sizes (small, medium, ...).

use crate::common::replace;
use crate::error::DomainError;
use crate::ids::{CreatureSizeId, CreatureTypeId};
use crate::value_objects::{Description, Length, Name};

#[derive(Debug, Clone)]
pub struct CreatureType {
    id: CreatureTypeId,
    name: Name,
    description: Description,
}

impl CreatureType {
    pub fn new(
        id: CreatureTypeId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            description: Description::new(description)?,
        })
    }

    pub fn id(&self) -> CreatureTypeId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }
}

impl_identity!(CreatureType, CreatureTypeId);

/// A size category and the square it controls on the grid.
#[derive(Debug, Clone)]
pub struct CreatureSize {
    id: CreatureSizeId,
    name: Name,
    description: Description,
    space: Length,
}

impl CreatureSize {
    pub fn new(
        id: CreatureSizeId,
        name: impl Into<String>,
        description: impl Into<String>,
        space: Length,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            description: Description::new(description)?,
            space: validate_space(space)?,
        })
    }

    pub fn id(&self) -> CreatureSizeId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn space(&self) -> Length {
        self.space
    }

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }

    pub fn new_space(&mut self, space: Length) -> Result<(), DomainError> {
        replace(&mut self.space, validate_space(space)?, "Space")
    }
}

impl_identity!(CreatureSize, CreatureSizeId);

fn validate_space(space: Length) -> Result<Length, DomainError> {
    if space.is_zero() {
        return Err(DomainError::invalid_data("Space must be greater than zero"));
    }
    Ok(space)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LengthUnit;

    #[test]
    fn size_requires_positive_space() {
        let zero = Length::new(0.0, LengthUnit::Ft).expect("valid length");
        assert!(CreatureSize::new(CreatureSizeId::new(), "Tiny", "Very small", zero).is_err());

        let five = Length::new(5.0, LengthUnit::Ft).expect("valid length");
        let mut size = CreatureSize::new(CreatureSizeId::new(), "Medium", "Human-sized", five)
            .expect("valid size");
        assert!(size.new_space(five).expect_err("same").is_idempotent());
        assert!(size.new_space(zero).expect_err("zero").is_invalid_data());
    }

    #[test]
    fn type_renames() {
        let mut humanoid = CreatureType::new(CreatureTypeId::new(), "Humanoid", "People")
            .expect("valid type");
        humanoid.new_name("Humanoids").expect("changed");
        assert_eq!(humanoid.name().as_str(), "Humanoids");
    }
}
