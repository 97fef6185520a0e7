//! Subclass use cases. A subclass belongs to one class for life; its name is
//! unique within that class.

use std::sync::Arc;

use compendium_domain::{CharacterClassId, Subclass, SubclassId, UserId};

use crate::infrastructure::ports::{
    CharacterClassRepo, SpellFilter, SpellRepo, SubclassFeatureFilter, SubclassFeatureRepo,
    SubclassFilter, SubclassRepo, UserRepo,
};
use crate::services::SubclassService;

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{
    authorize, is_rename, require_available, require_found, require_reference,
    require_unreferenced,
};

const ENTITY: &str = "Subclass";

#[derive(Debug, Clone)]
pub struct CreateSubclassCommand {
    pub user_id: UserId,
    pub class_id: CharacterClassId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct SubclassChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl_changes!(SubclassChanges { name, description });

pub type UpdateSubclassCommand = UpdateCommand<SubclassId, SubclassChanges>;

pub struct SubclassCrud {
    users: Arc<dyn UserRepo>,
    subclasses: Arc<dyn SubclassRepo>,
    classes: Arc<dyn CharacterClassRepo>,
    features: Arc<dyn SubclassFeatureRepo>,
    spells: Arc<dyn SpellRepo>,
    service: Arc<SubclassService>,
}

impl SubclassCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        subclasses: Arc<dyn SubclassRepo>,
        classes: Arc<dyn CharacterClassRepo>,
        features: Arc<dyn SubclassFeatureRepo>,
        spells: Arc<dyn SpellRepo>,
        service: Arc<SubclassService>,
    ) -> Self {
        Self {
            users,
            subclasses,
            classes,
            features,
            spells,
            service,
        }
    }

    pub async fn create(&self, command: CreateSubclassCommand) -> Result<SubclassId, UseCaseError> {
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
            ENTITY,
            command.name.trim(),
        )?;

        let subclass = Subclass::new(
            self.subclasses.next_id().await?,
            command.class_id,
            command.name,
            command.description,
        )?;
        self.subclasses.create(&subclass).await?;

        tracing::info!(
            subclass_id = %subclass.id(),
            class_id = %subclass.class_id(),
            name = %subclass.name(),
            "Subclass created"
        );
        Ok(subclass.id())
    }

    pub async fn update(&self, command: UpdateSubclassCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut subclass = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(subclass.name(), &name) {
                require_available(
                    self.service
                        .can_rename_with_name(subclass.class_id(), &name)
                        .await?,
                    ENTITY,
                    name.trim(),
                )?;
            }
            subclass.new_name(name)?;
        }
        if let Some(description) = changes.description {
            subclass.new_description(description)?;
        }

        self.subclasses.update(&subclass).await?;
        tracing::info!(subclass_id = %subclass.id(), "Subclass updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<SubclassId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        let id = command.id;
        require_found(self.subclasses.id_exists(id).await?, ENTITY, id)?;

        let features = SubclassFeatureFilter {
            subclass_ids: Some(vec![id]),
            ..Default::default()
        };
        require_unreferenced(
            self.features.filter(&features).await?.len(),
            ENTITY,
            id,
            "subclass features",
        )?;
        let spells = SpellFilter {
            subclass_ids: Some(vec![id]),
            ..Default::default()
        };
        require_unreferenced(self.spells.filter(&spells).await?.len(), ENTITY, id, "spells")?;

        self.subclasses.delete(id).await?;
        tracing::info!(subclass_id = %id, "Subclass deleted");
        Ok(())
    }

    pub async fn get(&self, id: SubclassId) -> Result<Subclass, UseCaseError> {
        self.subclasses
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(ENTITY, id))
    }

    pub async fn list(&self, filter: SubclassFilter) -> Result<Vec<Subclass>, UseCaseError> {
        Ok(self.subclasses.filter(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockCharacterClassRepo, MockSpellRepo, MockSubclassFeatureRepo, MockSubclassRepo,
    };
    use crate::test_fixtures::known_user;

    fn crud(
        user_id: UserId,
        subclasses: MockSubclassRepo,
        classes: MockCharacterClassRepo,
        features: MockSubclassFeatureRepo,
    ) -> SubclassCrud {
        let subclasses: Arc<dyn SubclassRepo> = Arc::new(subclasses);
        SubclassCrud::new(
            Arc::new(known_user(user_id)),
            subclasses.clone(),
            Arc::new(classes),
            Arc::new(features),
            Arc::new(MockSpellRepo::new()),
            Arc::new(SubclassService::new(subclasses)),
        )
    }

    #[tokio::test]
    async fn same_name_in_another_class_is_allowed() {
        let user_id = UserId::new();
        let class_id = CharacterClassId::new();

        let mut subclasses = MockSubclassRepo::new();
        subclasses
            .expect_name_for_class_exists()
            .withf(move |id, name| *id == class_id && name == "Champion")
            .returning(|_, _| Ok(false));
        subclasses.expect_next_id().returning(|| Ok(SubclassId::new()));
        subclasses
            .expect_create()
            .withf(move |subclass| subclass.class_id() == class_id)
            .times(1)
            .returning(|_| Ok(()));
        let mut classes = MockCharacterClassRepo::new();
        classes.expect_id_exists().returning(|_| Ok(true));

        crud(user_id, subclasses, classes, MockSubclassFeatureRepo::new())
            .create(CreateSubclassCommand {
                user_id,
                class_id,
                name: "Champion".to_string(),
                description: "Raw physical power".to_string(),
            })
            .await
            .expect("created");
    }

    #[tokio::test]
    async fn missing_class_is_checked_before_name() {
        let user_id = UserId::new();
        let mut subclasses = MockSubclassRepo::new();
        subclasses.expect_name_for_class_exists().times(0);
        let mut classes = MockCharacterClassRepo::new();
        classes.expect_id_exists().returning(|_| Ok(false));

        let error = crud(user_id, subclasses, classes, MockSubclassFeatureRepo::new())
            .create(CreateSubclassCommand {
                user_id,
                class_id: CharacterClassId::new(),
                name: "Champion".to_string(),
                description: "Raw physical power".to_string(),
            })
            .await
            .expect_err("missing class");
        assert!(error.is_invalid_data());
    }

    #[tokio::test]
    async fn subclass_with_features_cannot_be_deleted() {
        let user_id = UserId::new();
        let subclass_id = SubclassId::new();

        let mut subclasses = MockSubclassRepo::new();
        subclasses.expect_id_exists().returning(|_| Ok(true));
        subclasses.expect_delete().times(0);
        let mut features = MockSubclassFeatureRepo::new();
        features.expect_filter().returning(move |_| {
            Ok(vec![compendium_domain::SubclassFeature::new(
                compendium_domain::SubclassFeatureId::new(),
                subclass_id,
                "Improved Critical",
                "Score a critical hit on a roll of 19 or 20",
                3,
            )
            .expect("valid feature")])
        });

        let error = crud(user_id, subclasses, MockCharacterClassRepo::new(), features)
            .delete(DeleteCommand::new(user_id, subclass_id))
            .await
            .expect_err("referenced");
        assert!(error.is_invalid_data());
    }
}
