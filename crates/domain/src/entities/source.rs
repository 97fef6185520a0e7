//! Source entity - a rulebook or supplement that content is published in.

use crate::common::replace;
use crate::error::DomainError;
use crate::ids::SourceId;
use crate::value_objects::{Description, Name};

#[derive(Debug, Clone)]
pub struct Source {
    id: SourceId,
    name: Name,
    description: Description,
}

impl Source {
    pub fn new(
        id: SourceId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            description: Description::new(description)?,
        })
    }

    pub fn id(&self) -> SourceId {
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

impl_identity!(Source, SourceId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_and_renames() {
        let mut source = Source::new(SourceId::new(), "Player's Handbook", "Core rules")
            .expect("valid source");
        assert!(source.new_name("Player's Handbook").expect_err("same").is_idempotent());
        source.new_name("PHB").expect("changed");
        assert_eq!(source.name().as_str(), "PHB");
    }

    #[test]
    fn rejects_empty_description() {
        assert!(Source::new(SourceId::new(), "PHB", "").is_err());
    }
}
