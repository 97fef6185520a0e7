//! Class level use cases. A class has at most one row per level.

use std::sync::Arc;

use compendium_domain::{CharacterClassId, ClassLevel, ClassLevelId, Dice, UserId};

use crate::infrastructure::ports::{CharacterClassRepo, ClassLevelFilter, ClassLevelRepo, UserRepo};
use crate::services::ClassLevelService;

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{authorize, require_available, require_found, require_reference};

const ENTITY: &str = "ClassLevel";

#[derive(Debug, Clone)]
pub struct CreateClassLevelCommand {
    pub user_id: UserId,
    pub class_id: CharacterClassId,
    pub level: u8,
    pub proficiency_bonus: u8,
    pub dice: Option<Dice>,
}

/// `dice: Some(None)` clears the dice.
#[derive(Debug, Clone, Default)]
pub struct ClassLevelChanges {
    pub level: Option<u8>,
    pub proficiency_bonus: Option<u8>,
    pub dice: Option<Option<Dice>>,
}

impl_changes!(ClassLevelChanges {
    level,
    proficiency_bonus,
    dice,
});

pub type UpdateClassLevelCommand = UpdateCommand<ClassLevelId, ClassLevelChanges>;

pub struct ClassLevelCrud {
    users: Arc<dyn UserRepo>,
    levels: Arc<dyn ClassLevelRepo>,
    classes: Arc<dyn CharacterClassRepo>,
    service: Arc<ClassLevelService>,
}

impl ClassLevelCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        levels: Arc<dyn ClassLevelRepo>,
        classes: Arc<dyn CharacterClassRepo>,
        service: Arc<ClassLevelService>,
    ) -> Self {
        Self {
            users,
            levels,
            classes,
            service,
        }
    }

    pub async fn create(&self, command: CreateClassLevelCommand) -> Result<ClassLevelId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_reference(
            self.classes.id_exists(command.class_id).await?,
            "CharacterClass",
            command.class_id,
        )?;

        let class_level = ClassLevel::new(
            self.levels.next_id().await?,
            command.class_id,
            command.level,
            command.proficiency_bonus,
            command.dice,
        )?;
        require_available(
            self.service
                .can_create_with_level(command.class_id, command.level)
                .await?,
            ENTITY,
            format_args!("level {}", command.level),
        )?;
        self.levels.create(&class_level).await?;

        tracing::info!(
            class_level_id = %class_level.id(),
            class_id = %class_level.class_id(),
            level = class_level.level(),
            "Class level created"
        );
        Ok(class_level.id())
    }

    pub async fn update(&self, command: UpdateClassLevelCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut class_level = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(level) = changes.level {
            class_level.new_level(level)?;
            require_available(
                self.service
                    .can_change_to_level(class_level.class_id(), level)
                    .await?,
                ENTITY,
                format_args!("level {}", level),
            )?;
        }
        if let Some(bonus) = changes.proficiency_bonus {
            class_level.new_proficiency_bonus(bonus)?;
        }
        if let Some(dice) = changes.dice {
            class_level.new_dice(dice)?;
        }

        self.levels.update(&class_level).await?;
        tracing::info!(class_level_id = %class_level.id(), "Class level updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<ClassLevelId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_found(self.levels.id_exists(command.id).await?, ENTITY, command.id)?;

        self.levels.delete(command.id).await?;
        tracing::info!(class_level_id = %command.id, "Class level deleted");
        Ok(())
    }

    pub async fn get(&self, id: ClassLevelId) -> Result<ClassLevel, UseCaseError> {
        self.levels
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(ENTITY, id))
    }

    pub async fn list(&self, filter: ClassLevelFilter) -> Result<Vec<ClassLevel>, UseCaseError> {
        Ok(self.levels.filter(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockCharacterClassRepo, MockClassLevelRepo};
    use crate::test_fixtures::known_user;

    fn crud(
        user_id: UserId,
        levels: MockClassLevelRepo,
        classes: MockCharacterClassRepo,
    ) -> ClassLevelCrud {
        let levels: Arc<dyn ClassLevelRepo> = Arc::new(levels);
        ClassLevelCrud::new(
            Arc::new(known_user(user_id)),
            levels.clone(),
            Arc::new(classes),
            Arc::new(ClassLevelService::new(levels)),
        )
    }

    #[tokio::test]
    async fn second_row_for_same_level_is_rejected() {
        let user_id = UserId::new();
        let class_id = CharacterClassId::new();

        let mut levels = MockClassLevelRepo::new();
        levels.expect_next_id().returning(|| Ok(ClassLevelId::new()));
        levels
            .expect_level_of_class_exists()
            .withf(move |id, level| *id == class_id && *level == 5)
            .returning(|_, _| Ok(true));
        levels.expect_create().times(0);
        let mut classes = MockCharacterClassRepo::new();
        classes.expect_id_exists().returning(|_| Ok(true));

        let error = crud(user_id, levels, classes)
            .create(CreateClassLevelCommand {
                user_id,
                class_id,
                level: 5,
                proficiency_bonus: 3,
                dice: None,
            })
            .await
            .expect_err("taken");
        assert!(error.is_invalid_data());
        assert!(error.to_string().contains("level 5"));
    }

    #[tokio::test]
    async fn out_of_range_proficiency_bonus_is_invalid() {
        let user_id = UserId::new();
        let mut levels = MockClassLevelRepo::new();
        levels.expect_next_id().returning(|| Ok(ClassLevelId::new()));
        levels.expect_create().times(0);
        let mut classes = MockCharacterClassRepo::new();
        classes.expect_id_exists().returning(|_| Ok(true));

        let error = crud(user_id, levels, classes)
            .create(CreateClassLevelCommand {
                user_id,
                class_id: CharacterClassId::new(),
                level: 1,
                proficiency_bonus: 7,
                dice: None,
            })
            .await
            .expect_err("bonus");
        assert!(error.is_invalid_data());
    }

    #[tokio::test]
    async fn same_level_is_idempotent_without_lookup() {
        let user_id = UserId::new();
        let existing =
            ClassLevel::new(ClassLevelId::new(), CharacterClassId::new(), 4, 2, None)
                .expect("valid level");
        let id = existing.id();

        let mut levels = MockClassLevelRepo::new();
        levels.expect_get().returning(move |_| Ok(Some(existing.clone())));
        levels.expect_level_of_class_exists().times(0);
        levels.expect_update().times(0);

        let command = UpdateClassLevelCommand::new(
            user_id,
            id,
            ClassLevelChanges {
                level: Some(4),
                ..Default::default()
            },
        )
        .expect("has changes");
        let error = crud(user_id, levels, MockCharacterClassRepo::new())
            .update(command)
            .await
            .expect_err("same level");
        assert!(error.is_idempotent());
    }
}
