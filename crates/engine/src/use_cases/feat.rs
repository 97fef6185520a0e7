//! Feat use cases.

use std::sync::Arc;

use compendium_domain::{ArmorType, Feat, FeatId, Modifier, ModifierRequirement, SourceId, UserId};

use crate::infrastructure::ports::{FeatFilter, FeatRepo, SourceRepo, UserRepo};
use crate::services::FeatService;

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{
    authorize, is_rename, require_available, require_found, require_reference,
};

const ENTITY: &str = "Feat";

#[derive(Debug, Clone)]
pub struct CreateFeatCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub caster: bool,
    pub required_armor_types: Vec<ArmorType>,
    pub required_modifiers: Vec<ModifierRequirement>,
    pub increase_modifiers: Vec<Modifier>,
    pub source_id: SourceId,
}

#[derive(Debug, Clone, Default)]
pub struct FeatChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub caster: Option<bool>,
    pub required_armor_types: Option<Vec<ArmorType>>,
    pub required_modifiers: Option<Vec<ModifierRequirement>>,
    pub increase_modifiers: Option<Vec<Modifier>>,
    pub source_id: Option<SourceId>,
}

impl_changes!(FeatChanges {
    name,
    description,
    caster,
    required_armor_types,
    required_modifiers,
    increase_modifiers,
    source_id,
});

pub type UpdateFeatCommand = UpdateCommand<FeatId, FeatChanges>;

pub struct FeatCrud {
    users: Arc<dyn UserRepo>,
    feats: Arc<dyn FeatRepo>,
    sources: Arc<dyn SourceRepo>,
    service: Arc<FeatService>,
}

impl FeatCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        feats: Arc<dyn FeatRepo>,
        sources: Arc<dyn SourceRepo>,
        service: Arc<FeatService>,
    ) -> Self {
        Self {
            users,
            feats,
            sources,
            service,
        }
    }

    pub async fn create(&self, command: CreateFeatCommand) -> Result<FeatId, UseCaseError> {
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

        let feat = Feat::new(
            self.feats.next_id().await?,
            command.name,
            command.description,
            command.caster,
            command.required_armor_types,
            command.required_modifiers,
            command.increase_modifiers,
            command.source_id,
        )?;
        self.feats.create(&feat).await?;

        tracing::info!(feat_id = %feat.id(), name = %feat.name(), "Feat created");
        Ok(feat.id())
    }

    pub async fn update(&self, command: UpdateFeatCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut feat = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(feat.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    ENTITY,
                    name.trim(),
                )?;
            }
            feat.new_name(name)?;
        }
        if let Some(description) = changes.description {
            feat.new_description(description)?;
        }
        if let Some(caster) = changes.caster {
            feat.new_caster(caster)?;
        }
        if let Some(armor_types) = changes.required_armor_types {
            feat.new_required_armor_types(armor_types)?;
        }
        if let Some(requirements) = changes.required_modifiers {
            feat.new_required_modifiers(requirements)?;
        }
        if let Some(modifiers) = changes.increase_modifiers {
            feat.new_increase_modifiers(modifiers)?;
        }
        if let Some(source_id) = changes.source_id {
            require_reference(self.sources.id_exists(source_id).await?, "Source", source_id)?;
            feat.new_source_id(source_id)?;
        }

        self.feats.update(&feat).await?;
        tracing::info!(feat_id = %feat.id(), "Feat updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<FeatId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_found(self.feats.id_exists(command.id).await?, ENTITY, command.id)?;

        self.feats.delete(command.id).await?;
        tracing::info!(feat_id = %command.id, "Feat deleted");
        Ok(())
    }

    pub async fn get(&self, id: FeatId) -> Result<Feat, UseCaseError> {
        self.feats
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(ENTITY, id))
    }

    pub async fn list(&self, filter: FeatFilter) -> Result<Vec<Feat>, UseCaseError> {
        Ok(self.feats.filter(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockFeatRepo, MockSourceRepo, MockUserRepo};
    use crate::test_fixtures::{known_user, unknown_user};

    fn create_heavily_armored(user_id: UserId, source_id: SourceId) -> CreateFeatCommand {
        CreateFeatCommand {
            user_id,
            name: "Heavily Armored".to_string(),
            description: "Gain proficiency with heavy armor".to_string(),
            caster: false,
            required_armor_types: vec![ArmorType::MediumArmor],
            required_modifiers: vec![],
            increase_modifiers: vec![Modifier::Strength],
            source_id,
        }
    }

    fn crud(users: MockUserRepo, feats: MockFeatRepo, sources: MockSourceRepo) -> FeatCrud {
        let feats: Arc<dyn FeatRepo> = Arc::new(feats);
        FeatCrud::new(
            Arc::new(users),
            feats.clone(),
            Arc::new(sources),
            Arc::new(FeatService::new(feats)),
        )
    }

    #[tokio::test]
    async fn create_stores_requirements() {
        let user_id = UserId::new();
        let source_id = SourceId::new();
        let mut feats = MockFeatRepo::new();
        feats.expect_name_exists().returning(|_| Ok(false));
        feats.expect_next_id().returning(|| Ok(FeatId::new()));
        feats
            .expect_create()
            .withf(move |feat| {
                feat.required_armor_types() == [ArmorType::MediumArmor]
                    && feat.source_id() == source_id
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut sources = MockSourceRepo::new();
        sources.expect_id_exists().returning(|_| Ok(true));

        crud(known_user(user_id), feats, sources)
            .create(create_heavily_armored(user_id, source_id))
            .await
            .expect("created");
    }

    #[tokio::test]
    async fn duplicate_required_modifier_is_invalid() {
        let user_id = UserId::new();
        let mut feats = MockFeatRepo::new();
        feats.expect_name_exists().returning(|_| Ok(false));
        feats.expect_next_id().returning(|| Ok(FeatId::new()));
        feats.expect_create().times(0);
        let mut sources = MockSourceRepo::new();
        sources.expect_id_exists().returning(|_| Ok(true));

        let mut command = create_heavily_armored(user_id, SourceId::new());
        command.required_modifiers = vec![
            ModifierRequirement::new(Modifier::Strength, 13).expect("valid"),
            ModifierRequirement::new(Modifier::Strength, 15).expect("valid"),
        ];
        let error = crud(known_user(user_id), feats, sources)
            .create(command)
            .await
            .expect_err("duplicate");
        assert!(error.is_invalid_data());
    }

    #[tokio::test]
    async fn delete_by_unknown_actor_is_access_error() {
        let user_id = UserId::new();
        let mut feats = MockFeatRepo::new();
        feats.expect_delete().times(0);

        let error = crud(unknown_user(user_id), feats, MockSourceRepo::new())
            .delete(DeleteCommand::new(user_id, FeatId::new()))
            .await
            .expect_err("unknown actor");
        assert!(error.is_access());
    }
}
