//! Creature type and creature size use cases.

use std::sync::Arc;

use compendium_domain::{CreatureSize, CreatureSizeId, CreatureType, CreatureTypeId, Length, UserId};

use crate::infrastructure::ports::{
    CreatureSizeRepo, CreatureTypeRepo, NameFilter, RaceFilter, RaceRepo, UserRepo,
};
use crate::services::{CreatureSizeService, CreatureTypeService};

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{
    authorize, is_rename, require_available, require_found, require_unreferenced,
};

// =============================================================================
// Creature Type
// =============================================================================

const CREATURE_TYPE: &str = "CreatureType";

#[derive(Debug, Clone)]
pub struct CreateCreatureTypeCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreatureTypeChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl_changes!(CreatureTypeChanges { name, description });

pub type UpdateCreatureTypeCommand = UpdateCommand<CreatureTypeId, CreatureTypeChanges>;

pub struct CreatureTypeCrud {
    users: Arc<dyn UserRepo>,
    creature_types: Arc<dyn CreatureTypeRepo>,
    races: Arc<dyn RaceRepo>,
    service: Arc<CreatureTypeService>,
}

impl CreatureTypeCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        creature_types: Arc<dyn CreatureTypeRepo>,
        races: Arc<dyn RaceRepo>,
        service: Arc<CreatureTypeService>,
    ) -> Self {
        Self {
            users,
            creature_types,
            races,
            service,
        }
    }

    pub async fn create(
        &self,
        command: CreateCreatureTypeCommand,
    ) -> Result<CreatureTypeId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_available(
            self.service.can_create_with_name(&command.name).await?,
            CREATURE_TYPE,
            command.name.trim(),
        )?;

        let creature_type = CreatureType::new(
            self.creature_types.next_id().await?,
            command.name,
            command.description,
        )?;
        self.creature_types.create(&creature_type).await?;

        tracing::info!(
            creature_type_id = %creature_type.id(),
            name = %creature_type.name(),
            "Creature type created"
        );
        Ok(creature_type.id())
    }

    pub async fn update(&self, command: UpdateCreatureTypeCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut creature_type = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(creature_type.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    CREATURE_TYPE,
                    name.trim(),
                )?;
            }
            creature_type.new_name(name)?;
        }
        if let Some(description) = changes.description {
            creature_type.new_description(description)?;
        }

        self.creature_types.update(&creature_type).await?;
        tracing::info!(creature_type_id = %creature_type.id(), "Creature type updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<CreatureTypeId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        let id = command.id;
        require_found(self.creature_types.id_exists(id).await?, CREATURE_TYPE, id)?;

        let races = RaceFilter {
            creature_type_ids: Some(vec![id]),
            ..Default::default()
        };
        require_unreferenced(self.races.filter(&races).await?.len(), CREATURE_TYPE, id, "races")?;

        self.creature_types.delete(id).await?;
        tracing::info!(creature_type_id = %id, "Creature type deleted");
        Ok(())
    }

    pub async fn get(&self, id: CreatureTypeId) -> Result<CreatureType, UseCaseError> {
        self.creature_types
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(CREATURE_TYPE, id))
    }

    pub async fn list(&self, filter: NameFilter) -> Result<Vec<CreatureType>, UseCaseError> {
        Ok(self.creature_types.filter(&filter).await?)
    }
}

// =============================================================================
// Creature Size
// =============================================================================

const CREATURE_SIZE: &str = "CreatureSize";

#[derive(Debug, Clone)]
pub struct CreateCreatureSizeCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub space: Length,
}

#[derive(Debug, Clone, Default)]
pub struct CreatureSizeChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub space: Option<Length>,
}

impl_changes!(CreatureSizeChanges { name, description, space });

pub type UpdateCreatureSizeCommand = UpdateCommand<CreatureSizeId, CreatureSizeChanges>;

pub struct CreatureSizeCrud {
    users: Arc<dyn UserRepo>,
    creature_sizes: Arc<dyn CreatureSizeRepo>,
    races: Arc<dyn RaceRepo>,
    service: Arc<CreatureSizeService>,
}

impl CreatureSizeCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        creature_sizes: Arc<dyn CreatureSizeRepo>,
        races: Arc<dyn RaceRepo>,
        service: Arc<CreatureSizeService>,
    ) -> Self {
        Self {
            users,
            creature_sizes,
            races,
            service,
        }
    }

    pub async fn create(
        &self,
        command: CreateCreatureSizeCommand,
    ) -> Result<CreatureSizeId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_available(
            self.service.can_create_with_name(&command.name).await?,
            CREATURE_SIZE,
            command.name.trim(),
        )?;

        let creature_size = CreatureSize::new(
            self.creature_sizes.next_id().await?,
            command.name,
            command.description,
            command.space,
        )?;
        self.creature_sizes.create(&creature_size).await?;

        tracing::info!(
            creature_size_id = %creature_size.id(),
            name = %creature_size.name(),
            "Creature size created"
        );
        Ok(creature_size.id())
    }

    pub async fn update(&self, command: UpdateCreatureSizeCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut creature_size = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(creature_size.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    CREATURE_SIZE,
                    name.trim(),
                )?;
            }
            creature_size.new_name(name)?;
        }
        if let Some(description) = changes.description {
            creature_size.new_description(description)?;
        }
        if let Some(space) = changes.space {
            creature_size.new_space(space)?;
        }

        self.creature_sizes.update(&creature_size).await?;
        tracing::info!(creature_size_id = %creature_size.id(), "Creature size updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<CreatureSizeId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        let id = command.id;
        require_found(self.creature_sizes.id_exists(id).await?, CREATURE_SIZE, id)?;

        let races = RaceFilter {
            creature_size_ids: Some(vec![id]),
            ..Default::default()
        };
        require_unreferenced(self.races.filter(&races).await?.len(), CREATURE_SIZE, id, "races")?;

        self.creature_sizes.delete(id).await?;
        tracing::info!(creature_size_id = %id, "Creature size deleted");
        Ok(())
    }

    pub async fn get(&self, id: CreatureSizeId) -> Result<CreatureSize, UseCaseError> {
        self.creature_sizes
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(CREATURE_SIZE, id))
    }

    pub async fn list(&self, filter: NameFilter) -> Result<Vec<CreatureSize>, UseCaseError> {
        Ok(self.creature_sizes.filter(&filter).await?)
    }
}
