//! User entity - the actor behind every mutation.

use crate::common::replace;
use crate::error::DomainError;
use crate::ids::UserId;
use crate::value_objects::Name;

#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: Name,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }
}

impl_identity!(User, UserId);
