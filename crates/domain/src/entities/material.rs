//! Materials equipment is made of, and material components consumed by spells.

use crate::common::replace;
use crate::error::DomainError;
use crate::ids::{MaterialComponentId, MaterialId};
use crate::value_objects::{Coins, Description, Name};

// ============================================================================
// Material
// ============================================================================

/// A crafting material such as steel, leather or mithral.
#[derive(Debug, Clone)]
pub struct Material {
    id: MaterialId,
    name: Name,
    description: Description,
}

impl Material {
    pub fn new(
        id: MaterialId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            description: Description::new(description)?,
        })
    }

    pub fn id(&self) -> MaterialId {
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

impl_identity!(Material, MaterialId);

// ============================================================================
// MaterialComponent
// ============================================================================

/// A physical component a spell needs, e.g. "a diamond worth 300 gp".
///
/// `cost` is `None` for components with no listed price (any component
/// pouch covers them).
#[derive(Debug, Clone)]
pub struct MaterialComponent {
    id: MaterialComponentId,
    name: Name,
    description: Description,
    cost: Option<Coins>,
    consumed: bool,
}

impl MaterialComponent {
    pub fn new(
        id: MaterialComponentId,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: Option<Coins>,
        consumed: bool,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            description: Description::new(description)?,
            cost,
            consumed,
        })
    }

    pub fn id(&self) -> MaterialComponentId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn cost(&self) -> Option<Coins> {
        self.cost
    }

    /// Whether casting the spell destroys the component.
    pub fn consumed(&self) -> bool {
        self.consumed
    }

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }

    pub fn new_cost(&mut self, cost: Option<Coins>) -> Result<(), DomainError> {
        replace(&mut self.cost, cost, "Cost")
    }

    pub fn new_consumed(&mut self, consumed: bool) -> Result<(), DomainError> {
        replace(&mut self.consumed, consumed, "Consumed")
    }
}

impl_identity!(MaterialComponent, MaterialComponentId);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceType;

    #[test]
    fn material_mutators() {
        let mut material = Material::new(MaterialId::new(), "Steel", "Forged iron alloy")
            .expect("valid material");
        assert!(material
            .new_description("Forged iron alloy")
            .expect_err("same")
            .is_idempotent());
        material.new_description("Carbon steel").expect("changed");
        assert_eq!(material.description().as_str(), "Carbon steel");
    }

    #[test]
    fn component_cost_can_be_cleared() {
        let diamond = Coins::new(300, PieceType::Gold).expect("valid coins");
        let mut component = MaterialComponent::new(
            MaterialComponentId::new(),
            "Diamond",
            "A diamond worth at least 300 gp",
            Some(diamond),
            true,
        )
        .expect("valid component");
        assert!(component.new_cost(Some(diamond)).is_err());
        component.new_cost(None).expect("changed");
        assert_eq!(component.cost(), None);
        assert!(component.new_consumed(true).expect_err("same").is_idempotent());
    }
}
