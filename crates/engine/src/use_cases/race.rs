//! Race use cases.

use std::sync::Arc;

use compendium_domain::{
    CreatureSizeId, CreatureTypeId, Length, ModifierBonus, Race, RaceId, SourceId, UserId,
};

use crate::infrastructure::ports::{
    CreatureSizeRepo, CreatureTypeRepo, RaceFilter, RaceRepo, SourceRepo, UserRepo,
};
use crate::services::RaceService;

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{
    authorize, is_rename, require_available, require_found, require_reference,
};

const ENTITY: &str = "Race";

#[derive(Debug, Clone)]
pub struct CreateRaceCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub creature_type_id: CreatureTypeId,
    pub creature_size_id: CreatureSizeId,
    pub speed: Length,
    pub increase_modifiers: Vec<ModifierBonus>,
    pub source_id: SourceId,
}

#[derive(Debug, Clone, Default)]
pub struct RaceChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub creature_type_id: Option<CreatureTypeId>,
    pub creature_size_id: Option<CreatureSizeId>,
    pub speed: Option<Length>,
    pub increase_modifiers: Option<Vec<ModifierBonus>>,
    pub source_id: Option<SourceId>,
}

impl_changes!(RaceChanges {
    name,
    description,
    creature_type_id,
    creature_size_id,
    speed,
    increase_modifiers,
    source_id,
});

pub type UpdateRaceCommand = UpdateCommand<RaceId, RaceChanges>;

/// Lookups a race's references are checked against.
pub struct RaceReferences {
    pub creature_types: Arc<dyn CreatureTypeRepo>,
    pub creature_sizes: Arc<dyn CreatureSizeRepo>,
    pub sources: Arc<dyn SourceRepo>,
}

pub struct RaceCrud {
    users: Arc<dyn UserRepo>,
    races: Arc<dyn RaceRepo>,
    references: RaceReferences,
    service: Arc<RaceService>,
}

impl RaceCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        races: Arc<dyn RaceRepo>,
        references: RaceReferences,
        service: Arc<RaceService>,
    ) -> Self {
        Self {
            users,
            races,
            references,
            service,
        }
    }

    pub async fn create(&self, command: CreateRaceCommand) -> Result<RaceId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_available(
            self.service.can_create_with_name(&command.name).await?,
            ENTITY,
            command.name.trim(),
        )?;
        self.require_creature_type(command.creature_type_id).await?;
        self.require_creature_size(command.creature_size_id).await?;
        self.require_source(command.source_id).await?;

        let race = Race::new(
            self.races.next_id().await?,
            command.name,
            command.description,
            command.creature_type_id,
            command.creature_size_id,
            command.speed,
            command.increase_modifiers,
            command.source_id,
        )?;
        self.races.create(&race).await?;

        tracing::info!(race_id = %race.id(), name = %race.name(), "Race created");
        Ok(race.id())
    }

    pub async fn update(&self, command: UpdateRaceCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut race = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(race.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    ENTITY,
                    name.trim(),
                )?;
            }
            race.new_name(name)?;
        }
        if let Some(description) = changes.description {
            race.new_description(description)?;
        }
        if let Some(id) = changes.creature_type_id {
            self.require_creature_type(id).await?;
            race.new_creature_type_id(id)?;
        }
        if let Some(id) = changes.creature_size_id {
            self.require_creature_size(id).await?;
            race.new_creature_size_id(id)?;
        }
        if let Some(speed) = changes.speed {
            race.new_speed(speed)?;
        }
        if let Some(modifiers) = changes.increase_modifiers {
            race.new_increase_modifiers(modifiers)?;
        }
        if let Some(source_id) = changes.source_id {
            self.require_source(source_id).await?;
            race.new_source_id(source_id)?;
        }

        self.races.update(&race).await?;
        tracing::info!(race_id = %race.id(), "Race updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<RaceId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_found(self.races.id_exists(command.id).await?, ENTITY, command.id)?;

        self.races.delete(command.id).await?;
        tracing::info!(race_id = %command.id, "Race deleted");
        Ok(())
    }

    pub async fn get(&self, id: RaceId) -> Result<Race, UseCaseError> {
        self.races
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(ENTITY, id))
    }

    pub async fn list(&self, filter: RaceFilter) -> Result<Vec<Race>, UseCaseError> {
        Ok(self.races.filter(&filter).await?)
    }

    async fn require_creature_type(&self, id: CreatureTypeId) -> Result<(), UseCaseError> {
        let exists = self.references.creature_types.id_exists(id).await?;
        require_reference(exists, "CreatureType", id)
    }

    async fn require_creature_size(&self, id: CreatureSizeId) -> Result<(), UseCaseError> {
        let exists = self.references.creature_sizes.id_exists(id).await?;
        require_reference(exists, "CreatureSize", id)
    }

    async fn require_source(&self, id: SourceId) -> Result<(), UseCaseError> {
        let exists = self.references.sources.id_exists(id).await?;
        require_reference(exists, "Source", id)
    }
}
