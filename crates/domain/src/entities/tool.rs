//! Tool entity - artisan's tools, kits, instruments and vehicles.

use crate::common::{ensure_unique, replace, replace_set};
use crate::error::DomainError;
use crate::ids::ToolId;
use crate::types::ToolType;
use crate::value_objects::{Coins, Description, Name, Weight};

/// A tool. `utilizes` lists what the tool is used for ("Craft armor",
/// "Pick locks"); each entry is trimmed, non-empty and listed once.
#[derive(Debug, Clone)]
pub struct Tool {
    id: ToolId,
    name: Name,
    description: Description,
    tool_type: ToolType,
    cost: Coins,
    weight: Weight,
    utilizes: Vec<String>,
}

impl Tool {
    pub fn new(
        id: ToolId,
        name: impl Into<String>,
        description: impl Into<String>,
        tool_type: ToolType,
        cost: Coins,
        weight: Weight,
        utilizes: Vec<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: Name::new(name)?,
            description: Description::new(description)?,
            tool_type,
            cost,
            weight,
            utilizes: validate_utilizes(utilizes)?,
        })
    }

    pub fn id(&self) -> ToolId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn tool_type(&self) -> ToolType {
        self.tool_type
    }

    pub fn cost(&self) -> Coins {
        self.cost
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn utilizes(&self) -> &[String] {
        &self.utilizes
    }

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }

    pub fn new_tool_type(&mut self, tool_type: ToolType) -> Result<(), DomainError> {
        replace(&mut self.tool_type, tool_type, "Tool type")
    }

    pub fn new_cost(&mut self, cost: Coins) -> Result<(), DomainError> {
        replace(&mut self.cost, cost, "Cost")
    }

    pub fn new_weight(&mut self, weight: Weight) -> Result<(), DomainError> {
        replace(&mut self.weight, weight, "Weight")
    }

    pub fn new_utilizes(&mut self, utilizes: Vec<String>) -> Result<(), DomainError> {
        replace_set(&mut self.utilizes, validate_utilizes(utilizes)?, "Utilizes")
    }
}

impl_identity!(Tool, ToolId);

fn validate_utilizes(utilizes: Vec<String>) -> Result<Vec<String>, DomainError> {
    let utilizes: Vec<String> = utilizes
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .collect();
    if utilizes.iter().any(String::is_empty) {
        return Err(DomainError::invalid_data("Utilizes entries cannot be empty"));
    }
    ensure_unique(&utilizes, "Utilizes")?;
    Ok(utilizes)
}
