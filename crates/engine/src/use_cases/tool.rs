//! Tool use cases. Tools reference nothing and nothing references them.

use std::sync::Arc;

use compendium_domain::{Coins, Tool, ToolId, ToolType, UserId, Weight};

use crate::infrastructure::ports::{ToolFilter, ToolRepo, UserRepo};
use crate::services::ToolService;

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{authorize, is_rename, require_available, require_found};

const ENTITY: &str = "Tool";

#[derive(Debug, Clone)]
pub struct CreateToolCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub tool_type: ToolType,
    pub cost: Coins,
    pub weight: Weight,
    pub utilizes: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ToolChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tool_type: Option<ToolType>,
    pub cost: Option<Coins>,
    pub weight: Option<Weight>,
    pub utilizes: Option<Vec<String>>,
}

impl_changes!(ToolChanges {
    name,
    description,
    tool_type,
    cost,
    weight,
    utilizes,
});

pub type UpdateToolCommand = UpdateCommand<ToolId, ToolChanges>;

pub struct ToolCrud {
    users: Arc<dyn UserRepo>,
    tools: Arc<dyn ToolRepo>,
    service: Arc<ToolService>,
}

impl ToolCrud {
    pub fn new(users: Arc<dyn UserRepo>, tools: Arc<dyn ToolRepo>, service: Arc<ToolService>) -> Self {
        Self {
            users,
            tools,
            service,
        }
    }

    pub async fn create(&self, command: CreateToolCommand) -> Result<ToolId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_available(
            self.service.can_create_with_name(&command.name).await?,
            ENTITY,
            command.name.trim(),
        )?;

        let tool = Tool::new(
            self.tools.next_id().await?,
            command.name,
            command.description,
            command.tool_type,
            command.cost,
            command.weight,
            command.utilizes,
        )?;
        self.tools.create(&tool).await?;

        tracing::info!(tool_id = %tool.id(), name = %tool.name(), "Tool created");
        Ok(tool.id())
    }

    pub async fn update(&self, command: UpdateToolCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut tool = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(tool.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    ENTITY,
                    name.trim(),
                )?;
            }
            tool.new_name(name)?;
        }
        if let Some(description) = changes.description {
            tool.new_description(description)?;
        }
        if let Some(tool_type) = changes.tool_type {
            tool.new_tool_type(tool_type)?;
        }
        if let Some(cost) = changes.cost {
            tool.new_cost(cost)?;
        }
        if let Some(weight) = changes.weight {
            tool.new_weight(weight)?;
        }
        if let Some(utilizes) = changes.utilizes {
            tool.new_utilizes(utilizes)?;
        }

        self.tools.update(&tool).await?;
        tracing::info!(tool_id = %tool.id(), "Tool updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<ToolId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_found(self.tools.id_exists(command.id).await?, ENTITY, command.id)?;

        self.tools.delete(command.id).await?;
        tracing::info!(tool_id = %command.id, "Tool deleted");
        Ok(())
    }

    pub async fn get(&self, id: ToolId) -> Result<Tool, UseCaseError> {
        self.tools
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(ENTITY, id))
    }

    pub async fn list(&self, filter: ToolFilter) -> Result<Vec<Tool>, UseCaseError> {
        Ok(self.tools.filter(&filter).await?)
    }
}
