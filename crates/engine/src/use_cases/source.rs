//! Source use cases (rulebooks and supplements content comes from).

use std::sync::Arc;

use compendium_domain::{Source, SourceId, UserId};

use crate::infrastructure::ports::{
    CharacterClassFilter, CharacterClassRepo, FeatFilter, FeatRepo, NameFilter, RaceFilter,
    RaceRepo, SourceRepo, SpellFilter, SpellRepo, UserRepo,
};
use crate::services::SourceService;

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{
    authorize, is_rename, require_available, require_found, require_unreferenced,
};

const ENTITY: &str = "Source";

#[derive(Debug, Clone)]
pub struct CreateSourceCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct SourceChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl_changes!(SourceChanges { name, description });

pub type UpdateSourceCommand = UpdateCommand<SourceId, SourceChanges>;

/// Source CRUD. A source can't be deleted while classes, races, feats or
/// spells still cite it.
pub struct SourceCrud {
    users: Arc<dyn UserRepo>,
    sources: Arc<dyn SourceRepo>,
    classes: Arc<dyn CharacterClassRepo>,
    races: Arc<dyn RaceRepo>,
    feats: Arc<dyn FeatRepo>,
    spells: Arc<dyn SpellRepo>,
    service: Arc<SourceService>,
}

impl SourceCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        sources: Arc<dyn SourceRepo>,
        classes: Arc<dyn CharacterClassRepo>,
        races: Arc<dyn RaceRepo>,
        feats: Arc<dyn FeatRepo>,
        spells: Arc<dyn SpellRepo>,
        service: Arc<SourceService>,
    ) -> Self {
        Self {
            users,
            sources,
            classes,
            races,
            feats,
            spells,
            service,
        }
    }

    pub async fn create(&self, command: CreateSourceCommand) -> Result<SourceId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_available(
            self.service.can_create_with_name(&command.name).await?,
            ENTITY,
            command.name.trim(),
        )?;

        let source = Source::new(
            self.sources.next_id().await?,
            command.name,
            command.description,
        )?;
        self.sources.create(&source).await?;

        tracing::info!(source_id = %source.id(), name = %source.name(), "Source created");
        Ok(source.id())
    }

    pub async fn update(&self, command: UpdateSourceCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut source = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(source.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    ENTITY,
                    name.trim(),
                )?;
            }
            source.new_name(name)?;
        }
        if let Some(description) = changes.description {
            source.new_description(description)?;
        }

        self.sources.update(&source).await?;
        tracing::info!(source_id = %source.id(), "Source updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<SourceId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        let id = command.id;
        require_found(self.sources.id_exists(id).await?, ENTITY, id)?;

        let classes = CharacterClassFilter {
            source_ids: Some(vec![id]),
            ..Default::default()
        };
        require_unreferenced(self.classes.filter(&classes).await?.len(), ENTITY, id, "classes")?;
        let races = RaceFilter {
            source_ids: Some(vec![id]),
            ..Default::default()
        };
        require_unreferenced(self.races.filter(&races).await?.len(), ENTITY, id, "races")?;
        let feats = FeatFilter {
            source_ids: Some(vec![id]),
            ..Default::default()
        };
        require_unreferenced(self.feats.filter(&feats).await?.len(), ENTITY, id, "feats")?;
        let spells = SpellFilter {
            source_ids: Some(vec![id]),
            ..Default::default()
        };
        require_unreferenced(self.spells.filter(&spells).await?.len(), ENTITY, id, "spells")?;

        self.sources.delete(id).await?;
        tracing::info!(source_id = %id, "Source deleted");
        Ok(())
    }

    pub async fn get(&self, id: SourceId) -> Result<Source, UseCaseError> {
        self.sources
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(ENTITY, id))
    }

    pub async fn list(&self, filter: NameFilter) -> Result<Vec<Source>, UseCaseError> {
        Ok(self.sources.filter(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockCharacterClassRepo, MockFeatRepo, MockRaceRepo, MockSourceRepo, MockSpellRepo,
        MockUserRepo,
    };
    use crate::test_fixtures::{dwarf, known_user, unknown_user};

    struct Mocks {
        users: MockUserRepo,
        sources: MockSourceRepo,
        classes: MockCharacterClassRepo,
        races: MockRaceRepo,
        feats: MockFeatRepo,
        spells: MockSpellRepo,
    }

    impl Mocks {
        fn new(user_id: UserId) -> Self {
            Self {
                users: known_user(user_id),
                sources: MockSourceRepo::new(),
                classes: MockCharacterClassRepo::new(),
                races: MockRaceRepo::new(),
                feats: MockFeatRepo::new(),
                spells: MockSpellRepo::new(),
            }
        }

        fn build(self) -> SourceCrud {
            let sources: Arc<dyn SourceRepo> = Arc::new(self.sources);
            SourceCrud::new(
                Arc::new(self.users),
                sources.clone(),
                Arc::new(self.classes),
                Arc::new(self.races),
                Arc::new(self.feats),
                Arc::new(self.spells),
                Arc::new(SourceService::new(sources)),
            )
        }
    }

    fn phb(id: SourceId) -> Source {
        Source::new(id, "Player's Handbook", "Core rules").expect("valid source")
    }

    #[tokio::test]
    async fn unknown_actor_cannot_create() {
        let user_id = UserId::new();
        let mut mocks = Mocks::new(user_id);
        mocks.users = unknown_user(user_id);
        mocks.sources.expect_create().times(0);

        let error = mocks
            .build()
            .create(CreateSourceCommand {
                user_id,
                name: "Player's Handbook".to_string(),
                description: "Core rules".to_string(),
            })
            .await
            .expect_err("unknown actor");
        assert!(error.is_access());
    }

    #[tokio::test]
    async fn rename_to_current_name_is_idempotent() {
        let user_id = UserId::new();
        let id = SourceId::new();
        let mut mocks = Mocks::new(user_id);
        mocks
            .sources
            .expect_get()
            .returning(move |_| Ok(Some(phb(id))));
        mocks.sources.expect_name_exists().times(0);
        mocks.sources.expect_update().times(0);

        let command = UpdateSourceCommand::new(
            user_id,
            id,
            SourceChanges {
                name: Some("Player's Handbook".to_string()),
                ..Default::default()
            },
        )
        .expect("has changes");
        let error = mocks.build().update(command).await.expect_err("same name");
        assert!(error.is_idempotent());
    }

    #[tokio::test]
    async fn cited_source_cannot_be_deleted() {
        let user_id = UserId::new();
        let id = SourceId::new();
        let mut mocks = Mocks::new(user_id);
        mocks.sources.expect_id_exists().returning(|_| Ok(true));
        mocks.classes.expect_filter().returning(|_| Ok(vec![]));
        mocks
            .races
            .expect_filter()
            .withf(move |filter| filter.source_ids == Some(vec![id]))
            .returning(|_| Ok(vec![dwarf(SourceId::new())]));
        mocks.sources.expect_delete().times(0);

        let error = mocks
            .build()
            .delete(DeleteCommand::new(user_id, id))
            .await
            .expect_err("referenced");
        assert!(error.is_invalid_data());
    }

    #[tokio::test]
    async fn unreferenced_source_is_deleted() {
        let user_id = UserId::new();
        let id = SourceId::new();
        let mut mocks = Mocks::new(user_id);
        mocks.sources.expect_id_exists().returning(|_| Ok(true));
        mocks.classes.expect_filter().returning(|_| Ok(vec![]));
        mocks.races.expect_filter().returning(|_| Ok(vec![]));
        mocks.feats.expect_filter().returning(|_| Ok(vec![]));
        mocks.spells.expect_filter().returning(|_| Ok(vec![]));
        mocks
            .sources
            .expect_delete()
            .withf(move |deleted| *deleted == id)
            .times(1)
            .returning(|_| Ok(()));

        mocks
            .build()
            .delete(DeleteCommand::new(user_id, id))
            .await
            .expect("deleted");
    }
}
