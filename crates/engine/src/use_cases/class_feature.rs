//! Class and subclass feature use cases.

use std::sync::Arc;

use compendium_domain::{
    CharacterClassId, ClassFeature, ClassFeatureId, SubclassFeature, SubclassFeatureId,
    SubclassId, UserId,
};

use crate::infrastructure::ports::{
    CharacterClassRepo, ClassFeatureFilter, ClassFeatureRepo, SubclassFeatureFilter,
    SubclassFeatureRepo, SubclassRepo, UserRepo,
};
use crate::services::{ClassFeatureService, SubclassFeatureService};

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{
    authorize, is_rename, require_available, require_found, require_reference,
};

/// Name, description and level: the editable part of either kind of feature.
#[derive(Debug, Clone, Default)]
pub struct FeatureChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub level: Option<u8>,
}

impl_changes!(FeatureChanges {
    name,
    description,
    level,
});

// =============================================================================
// Class features
// =============================================================================

const CLASS_FEATURE: &str = "ClassFeature";

#[derive(Debug, Clone)]
pub struct CreateClassFeatureCommand {
    pub user_id: UserId,
    pub class_id: CharacterClassId,
    pub name: String,
    pub description: String,
    pub level: u8,
}

pub type UpdateClassFeatureCommand = UpdateCommand<ClassFeatureId, FeatureChanges>;

pub struct ClassFeatureCrud {
    users: Arc<dyn UserRepo>,
    features: Arc<dyn ClassFeatureRepo>,
    classes: Arc<dyn CharacterClassRepo>,
    service: Arc<ClassFeatureService>,
}

impl ClassFeatureCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        features: Arc<dyn ClassFeatureRepo>,
        classes: Arc<dyn CharacterClassRepo>,
        service: Arc<ClassFeatureService>,
    ) -> Self {
        Self {
            users,
            features,
            classes,
            service,
        }
    }

    pub async fn create(
        &self,
        command: CreateClassFeatureCommand,
    ) -> Result<ClassFeatureId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_reference(
            self.classes.id_exists(command.class_id).await?,
            "CharacterClass",
            command.class_id,
        )?;
        require_available(
            self.service
                .can_create_with_name(command.class_id, &command.name)
                .await?,
            CLASS_FEATURE,
            command.name.trim(),
        )?;

        let feature = ClassFeature::new(
            self.features.next_id().await?,
            command.class_id,
            command.name,
            command.description,
            command.level,
        )?;
        self.features.create(&feature).await?;

        tracing::info!(
            feature_id = %feature.id(),
            class_id = %feature.class_id(),
            level = feature.level(),
            "Class feature created"
        );
        Ok(feature.id())
    }

    pub async fn update(&self, command: UpdateClassFeatureCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut feature = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(feature.name(), &name) {
                require_available(
                    self.service
                        .can_rename_with_name(feature.class_id(), &name)
                        .await?,
                    CLASS_FEATURE,
                    name.trim(),
                )?;
            }
            feature.new_name(name)?;
        }
        if let Some(description) = changes.description {
            feature.new_description(description)?;
        }
        if let Some(level) = changes.level {
            feature.new_level(level)?;
        }

        self.features.update(&feature).await?;
        tracing::info!(feature_id = %feature.id(), "Class feature updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<ClassFeatureId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_found(
            self.features.id_exists(command.id).await?,
            CLASS_FEATURE,
            command.id,
        )?;

        self.features.delete(command.id).await?;
        tracing::info!(feature_id = %command.id, "Class feature deleted");
        Ok(())
    }

    pub async fn get(&self, id: ClassFeatureId) -> Result<ClassFeature, UseCaseError> {
        self.features
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(CLASS_FEATURE, id))
    }

    pub async fn list(&self, filter: ClassFeatureFilter) -> Result<Vec<ClassFeature>, UseCaseError> {
        Ok(self.features.filter(&filter).await?)
    }
}

// =============================================================================
// Subclass features
// =============================================================================

const SUBCLASS_FEATURE: &str = "SubclassFeature";

#[derive(Debug, Clone)]
pub struct CreateSubclassFeatureCommand {
    pub user_id: UserId,
    pub subclass_id: SubclassId,
    pub name: String,
    pub description: String,
    pub level: u8,
}

pub type UpdateSubclassFeatureCommand = UpdateCommand<SubclassFeatureId, FeatureChanges>;

pub struct SubclassFeatureCrud {
    users: Arc<dyn UserRepo>,
    features: Arc<dyn SubclassFeatureRepo>,
    subclasses: Arc<dyn SubclassRepo>,
    service: Arc<SubclassFeatureService>,
}

impl SubclassFeatureCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        features: Arc<dyn SubclassFeatureRepo>,
        subclasses: Arc<dyn SubclassRepo>,
        service: Arc<SubclassFeatureService>,
    ) -> Self {
        Self {
            users,
            features,
            subclasses,
            service,
        }
    }

    pub async fn create(
        &self,
        command: CreateSubclassFeatureCommand,
    ) -> Result<SubclassFeatureId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_reference(
            self.subclasses.id_exists(command.subclass_id).await?,
            "Subclass",
            command.subclass_id,
        )?;
        require_available(
            self.service
                .can_create_with_name(command.subclass_id, &command.name)
                .await?,
            SUBCLASS_FEATURE,
            command.name.trim(),
        )?;

        let feature = SubclassFeature::new(
            self.features.next_id().await?,
            command.subclass_id,
            command.name,
            command.description,
            command.level,
        )?;
        self.features.create(&feature).await?;

        tracing::info!(
            feature_id = %feature.id(),
            subclass_id = %feature.subclass_id(),
            level = feature.level(),
            "Subclass feature created"
        );
        Ok(feature.id())
    }

    pub async fn update(&self, command: UpdateSubclassFeatureCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut feature = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(feature.name(), &name) {
                require_available(
                    self.service
                        .can_rename_with_name(feature.subclass_id(), &name)
                        .await?,
                    SUBCLASS_FEATURE,
                    name.trim(),
                )?;
            }
            feature.new_name(name)?;
        }
        if let Some(description) = changes.description {
            feature.new_description(description)?;
        }
        if let Some(level) = changes.level {
            feature.new_level(level)?;
        }

        self.features.update(&feature).await?;
        tracing::info!(feature_id = %feature.id(), "Subclass feature updated");
        Ok(())
    }

    pub async fn delete(
        &self,
        command: DeleteCommand<SubclassFeatureId>,
    ) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_found(
            self.features.id_exists(command.id).await?,
            SUBCLASS_FEATURE,
            command.id,
        )?;

        self.features.delete(command.id).await?;
        tracing::info!(feature_id = %command.id, "Subclass feature deleted");
        Ok(())
    }

    pub async fn get(&self, id: SubclassFeatureId) -> Result<SubclassFeature, UseCaseError> {
        self.features
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(SUBCLASS_FEATURE, id))
    }

    pub async fn list(
        &self,
        filter: SubclassFeatureFilter,
    ) -> Result<Vec<SubclassFeature>, UseCaseError> {
        Ok(self.features.filter(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockCharacterClassRepo, MockClassFeatureRepo, MockSubclassFeatureRepo, MockSubclassRepo,
    };
    use crate::test_fixtures::known_user;

    fn class_crud(
        user_id: UserId,
        features: MockClassFeatureRepo,
        classes: MockCharacterClassRepo,
    ) -> ClassFeatureCrud {
        let features: Arc<dyn ClassFeatureRepo> = Arc::new(features);
        ClassFeatureCrud::new(
            Arc::new(known_user(user_id)),
            features.clone(),
            Arc::new(classes),
            Arc::new(ClassFeatureService::new(features)),
        )
    }

    #[tokio::test]
    async fn class_feature_level_is_bounded() {
        let user_id = UserId::new();
        let mut features = MockClassFeatureRepo::new();
        features.expect_name_for_class_exists().returning(|_, _| Ok(false));
        features.expect_next_id().returning(|| Ok(ClassFeatureId::new()));
        features.expect_create().times(0);
        let mut classes = MockCharacterClassRepo::new();
        classes.expect_id_exists().returning(|_| Ok(true));

        let error = class_crud(user_id, features, classes)
            .create(CreateClassFeatureCommand {
                user_id,
                class_id: CharacterClassId::new(),
                name: "Action Surge".to_string(),
                description: "Take one additional action".to_string(),
                level: 21,
            })
            .await
            .expect_err("level out of range");
        assert!(error.is_invalid_data());
    }

    #[tokio::test]
    async fn class_feature_name_taken_within_class() {
        let user_id = UserId::new();
        let mut features = MockClassFeatureRepo::new();
        features.expect_name_for_class_exists().returning(|_, _| Ok(true));
        features.expect_create().times(0);
        let mut classes = MockCharacterClassRepo::new();
        classes.expect_id_exists().returning(|_| Ok(true));

        let error = class_crud(user_id, features, classes)
            .create(CreateClassFeatureCommand {
                user_id,
                class_id: CharacterClassId::new(),
                name: "Action Surge".to_string(),
                description: "Take one additional action".to_string(),
                level: 2,
            })
            .await
            .expect_err("taken");
        assert!(error.is_invalid_data());
        assert!(error.to_string().contains("Action Surge"));
    }

    #[tokio::test]
    async fn subclass_feature_level_change() {
        let user_id = UserId::new();
        let feature = SubclassFeature::new(
            SubclassFeatureId::new(),
            SubclassId::new(),
            "Remarkable Athlete",
            "Add half proficiency to physical checks",
            7,
        )
        .expect("valid feature");
        let feature_id = feature.id();

        let mut features = MockSubclassFeatureRepo::new();
        features
            .expect_get()
            .returning(move |_| Ok(Some(feature.clone())));
        features
            .expect_update()
            .withf(|feature| feature.level() == 10)
            .times(1)
            .returning(|_| Ok(()));
        let features: Arc<dyn SubclassFeatureRepo> = Arc::new(features);
        let crud = SubclassFeatureCrud::new(
            Arc::new(known_user(user_id)),
            features.clone(),
            Arc::new(MockSubclassRepo::new()),
            Arc::new(SubclassFeatureService::new(features)),
        );

        let command = UpdateSubclassFeatureCommand::new(
            user_id,
            feature_id,
            FeatureChanges {
                level: Some(10),
                ..Default::default()
            },
        )
        .expect("has changes");
        crud.update(command).await.expect("updated");
    }
}
