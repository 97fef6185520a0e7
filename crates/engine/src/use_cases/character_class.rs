//! Character class use cases.

use std::sync::Arc;

use compendium_domain::{CharacterClass, CharacterClassId, Dice, Modifier, SourceId, UserId};

use crate::infrastructure::ports::{
    CharacterClassFilter, CharacterClassRepo, ClassFeatureFilter, ClassFeatureRepo,
    ClassLevelFilter, ClassLevelRepo, SourceRepo, SpellFilter, SpellRepo, SubclassFilter,
    SubclassRepo, UserRepo,
};
use crate::services::CharacterClassService;

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{
    authorize, is_rename, require_available, require_found, require_reference,
    require_unreferenced,
};

const ENTITY: &str = "CharacterClass";

#[derive(Debug, Clone)]
pub struct CreateCharacterClassCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub primary_modifiers: Vec<Modifier>,
    pub saving_throws: Vec<Modifier>,
    pub hit_dice: Dice,
    pub source_id: SourceId,
}

#[derive(Debug, Clone, Default)]
pub struct CharacterClassChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub primary_modifiers: Option<Vec<Modifier>>,
    pub saving_throws: Option<Vec<Modifier>>,
    pub hit_dice: Option<Dice>,
    pub source_id: Option<SourceId>,
}

impl_changes!(CharacterClassChanges {
    name,
    description,
    primary_modifiers,
    saving_throws,
    hit_dice,
    source_id,
});

pub type UpdateCharacterClassCommand = UpdateCommand<CharacterClassId, CharacterClassChanges>;

/// The dependents a class can't be deleted out from under.
pub struct ClassDependents {
    pub subclasses: Arc<dyn SubclassRepo>,
    pub features: Arc<dyn ClassFeatureRepo>,
    pub levels: Arc<dyn ClassLevelRepo>,
    pub spells: Arc<dyn SpellRepo>,
}

/// Character class CRUD. Subclasses, class features, class levels and
/// spells point at classes; deleting a class any of them still names fails.
pub struct CharacterClassCrud {
    users: Arc<dyn UserRepo>,
    classes: Arc<dyn CharacterClassRepo>,
    sources: Arc<dyn SourceRepo>,
    dependents: ClassDependents,
    service: Arc<CharacterClassService>,
}

impl CharacterClassCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        classes: Arc<dyn CharacterClassRepo>,
        sources: Arc<dyn SourceRepo>,
        dependents: ClassDependents,
        service: Arc<CharacterClassService>,
    ) -> Self {
        Self {
            users,
            classes,
            sources,
            dependents,
            service,
        }
    }

    pub async fn create(
        &self,
        command: CreateCharacterClassCommand,
    ) -> Result<CharacterClassId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_available(
            self.service.can_create_with_name(&command.name).await?,
            ENTITY,
            command.name.trim(),
        )?;
        require_reference(
            self.sources.id_exists(command.source_id).await?,
            "Source",
            command.source_id,
        )?;

        let class = CharacterClass::new(
            self.classes.next_id().await?,
            command.name,
            command.description,
            command.primary_modifiers,
            command.saving_throws,
            command.hit_dice,
            command.source_id,
        )?;
        self.classes.create(&class).await?;

        tracing::info!(class_id = %class.id(), name = %class.name(), "Character class created");
        Ok(class.id())
    }

    pub async fn update(&self, command: UpdateCharacterClassCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut class = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(class.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    ENTITY,
                    name.trim(),
                )?;
            }
            class.new_name(name)?;
        }
        if let Some(description) = changes.description {
            class.new_description(description)?;
        }
        if let Some(modifiers) = changes.primary_modifiers {
            class.new_primary_modifiers(modifiers)?;
        }
        if let Some(saving_throws) = changes.saving_throws {
            class.new_saving_throws(saving_throws)?;
        }
        if let Some(hit_dice) = changes.hit_dice {
            class.new_hit_dice(hit_dice)?;
        }
        if let Some(source_id) = changes.source_id {
            require_reference(self.sources.id_exists(source_id).await?, "Source", source_id)?;
            class.new_source_id(source_id)?;
        }

        self.classes.update(&class).await?;
        tracing::info!(class_id = %class.id(), "Character class updated");
        Ok(())
    }

    pub async fn delete(
        &self,
        command: DeleteCommand<CharacterClassId>,
    ) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        let id = command.id;
        require_found(self.classes.id_exists(id).await?, ENTITY, id)?;

        let class_ids = Some(vec![id]);
        let subclasses = SubclassFilter {
            class_ids: class_ids.clone(),
            ..Default::default()
        };
        require_unreferenced(
            self.dependents.subclasses.filter(&subclasses).await?.len(),
            ENTITY,
            id,
            "subclasses",
        )?;
        let features = ClassFeatureFilter {
            class_ids: class_ids.clone(),
            ..Default::default()
        };
        require_unreferenced(
            self.dependents.features.filter(&features).await?.len(),
            ENTITY,
            id,
            "class features",
        )?;
        let levels = ClassLevelFilter {
            class_ids: class_ids.clone(),
            ..Default::default()
        };
        require_unreferenced(
            self.dependents.levels.filter(&levels).await?.len(),
            ENTITY,
            id,
            "class levels",
        )?;
        let spells = SpellFilter {
            class_ids,
            ..Default::default()
        };
        require_unreferenced(
            self.dependents.spells.filter(&spells).await?.len(),
            ENTITY,
            id,
            "spells",
        )?;

        self.classes.delete(id).await?;
        tracing::info!(class_id = %id, "Character class deleted");
        Ok(())
    }

    pub async fn get(&self, id: CharacterClassId) -> Result<CharacterClass, UseCaseError> {
        self.classes
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(ENTITY, id))
    }

    pub async fn list(
        &self,
        filter: CharacterClassFilter,
    ) -> Result<Vec<CharacterClass>, UseCaseError> {
        Ok(self.classes.filter(&filter).await?)
    }
}
