//! Features granted by a class or subclass at a given level.

use crate::common::{ensure_range, replace};
use crate::error::DomainError;
use crate::ids::{CharacterClassId, ClassFeatureId, SubclassFeatureId, SubclassId};
use crate::value_objects::{Description, Name};

fn validate_level(level: u8) -> Result<u8, DomainError> {
    ensure_range(level, 1, 20, "Level")?;
    Ok(level)
}

// ============================================================================
// ClassFeature
// ============================================================================

/// A feature a class gains at `level`. Names are unique per class.
#[derive(Debug, Clone)]
pub struct ClassFeature {
    id: ClassFeatureId,
    class_id: CharacterClassId,
    name: Name,
    description: Description,
    level: u8,
}

impl ClassFeature {
    pub fn new(
        id: ClassFeatureId,
        class_id: CharacterClassId,
        name: impl Into<String>,
        description: impl Into<String>,
        level: u8,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            class_id,
            name: Name::new(name)?,
            description: Description::new(description)?,
            level: validate_level(level)?,
        })
    }

    pub fn id(&self) -> ClassFeatureId {
        self.id
    }

    pub fn class_id(&self) -> CharacterClassId {
        self.class_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }

    pub fn new_level(&mut self, level: u8) -> Result<(), DomainError> {
        replace(&mut self.level, validate_level(level)?, "Level")
    }
}

impl_identity!(ClassFeature, ClassFeatureId);

// ============================================================================
// SubclassFeature
// ============================================================================

/// A feature a subclass gains at `level`. Names are unique per subclass.
#[derive(Debug, Clone)]
pub struct SubclassFeature {
    id: SubclassFeatureId,
    subclass_id: SubclassId,
    name: Name,
    description: Description,
    level: u8,
}

impl SubclassFeature {
    pub fn new(
        id: SubclassFeatureId,
        subclass_id: SubclassId,
        name: impl Into<String>,
        description: impl Into<String>,
        level: u8,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            subclass_id,
            name: Name::new(name)?,
            description: Description::new(description)?,
            level: validate_level(level)?,
        })
    }

    pub fn id(&self) -> SubclassFeatureId {
        self.id
    }

    pub fn subclass_id(&self) -> SubclassId {
        self.subclass_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }

    pub fn new_level(&mut self, level: u8) -> Result<(), DomainError> {
        replace(&mut self.level, validate_level(level)?, "Level")
    }
}

impl_identity!(SubclassFeature, SubclassFeatureId);
