//! Subclass entity - a specialization of a character class.

use crate::common::replace;
use crate::error::DomainError;
use crate::ids::{CharacterClassId, SubclassId};
use crate::value_objects::{Description, Name};

/// A subclass. Its name is unique within its class, not globally.
#[derive(Debug, Clone)]
pub struct Subclass {
    id: SubclassId,
    class_id: CharacterClassId,
    name: Name,
    description: Description,
}

impl Subclass {
    pub fn new(
        id: SubclassId,
        class_id: CharacterClassId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            class_id,
            name: Name::new(name)?,
            description: Description::new(description)?,
        })
    }

    pub fn id(&self) -> SubclassId {
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

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }
}

impl_identity!(Subclass, SubclassId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subclass_mutators() {
        let mut subclass = Subclass::new(
            SubclassId::new(),
            CharacterClassId::new(),
            "Champion",
            "Raw physical power",
        )
        .expect("valid subclass");
        assert!(subclass.new_name("Champion").expect_err("same").is_idempotent());
        assert!(subclass.new_name("").expect_err("empty").is_invalid_data());
        subclass.new_description("Improved critical").expect("changed");
    }
}
