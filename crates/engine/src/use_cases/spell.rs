//! Spell use cases.
//!
//! A spell points at classes, subclasses, material components and a source.
//! Every referenced id is checked before the spell is built, and the error
//! names the first id that is missing.

use std::sync::Arc;

use compendium_domain::{
    CastingTime, CharacterClassId, DamageType, GameTime, Length, MaterialComponentId, Modifier,
    SourceId, Spell, SpellComponents, SpellId, SpellSchool, SubclassId, UserId,
};

use crate::infrastructure::ports::{
    CharacterClassRepo, MaterialComponentRepo, SourceRepo, SpellFilter, SpellRepo, SubclassRepo,
    UserRepo,
};
use crate::services::SpellService;

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{
    authorize, is_rename, require_available, require_found, require_reference,
};

const ENTITY: &str = "Spell";

#[derive(Debug, Clone)]
pub struct CreateSpellCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub next_level_description: Option<String>,
    pub level: u8,
    pub school: SpellSchool,
    pub class_ids: Vec<CharacterClassId>,
    pub subclass_ids: Vec<SubclassId>,
    pub casting_time: CastingTime,
    pub duration: Option<GameTime>,
    pub distance: Length,
    pub components: SpellComponents,
    pub saving_throws: Vec<Modifier>,
    pub damage_types: Vec<DamageType>,
    pub concentration: bool,
    pub ritual: bool,
    pub source_id: SourceId,
}

/// Double options (`Some(None)`) clear an optional field.
#[derive(Debug, Clone, Default)]
pub struct SpellChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub next_level_description: Option<Option<String>>,
    pub level: Option<u8>,
    pub school: Option<SpellSchool>,
    pub class_ids: Option<Vec<CharacterClassId>>,
    pub subclass_ids: Option<Vec<SubclassId>>,
    pub casting_time: Option<CastingTime>,
    pub duration: Option<Option<GameTime>>,
    pub distance: Option<Length>,
    pub components: Option<SpellComponents>,
    pub saving_throws: Option<Vec<Modifier>>,
    pub damage_types: Option<Vec<DamageType>>,
    pub concentration: Option<bool>,
    pub ritual: Option<bool>,
    pub source_id: Option<SourceId>,
}

impl_changes!(SpellChanges {
    name,
    description,
    next_level_description,
    level,
    school,
    class_ids,
    subclass_ids,
    casting_time,
    duration,
    distance,
    components,
    saving_throws,
    damage_types,
    concentration,
    ritual,
    source_id,
});

pub type UpdateSpellCommand = UpdateCommand<SpellId, SpellChanges>;

/// Lookups a spell's references are checked against.
pub struct SpellReferences {
    pub classes: Arc<dyn CharacterClassRepo>,
    pub subclasses: Arc<dyn SubclassRepo>,
    pub components: Arc<dyn MaterialComponentRepo>,
    pub sources: Arc<dyn SourceRepo>,
}

impl SpellReferences {
    async fn require_classes(&self, ids: &[CharacterClassId]) -> Result<(), UseCaseError> {
        for &id in ids {
            require_reference(self.classes.id_exists(id).await?, "CharacterClass", id)?;
        }
        Ok(())
    }

    async fn require_subclasses(&self, ids: &[SubclassId]) -> Result<(), UseCaseError> {
        for &id in ids {
            require_reference(self.subclasses.id_exists(id).await?, "Subclass", id)?;
        }
        Ok(())
    }

    async fn require_components(&self, ids: &[MaterialComponentId]) -> Result<(), UseCaseError> {
        for &id in ids {
            require_reference(self.components.id_exists(id).await?, "MaterialComponent", id)?;
        }
        Ok(())
    }

    async fn require_source(&self, id: SourceId) -> Result<(), UseCaseError> {
        require_reference(self.sources.id_exists(id).await?, "Source", id)
    }
}

pub struct SpellCrud {
    users: Arc<dyn UserRepo>,
    spells: Arc<dyn SpellRepo>,
    references: SpellReferences,
    service: Arc<SpellService>,
}

impl SpellCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        spells: Arc<dyn SpellRepo>,
        references: SpellReferences,
        service: Arc<SpellService>,
    ) -> Self {
        Self {
            users,
            spells,
            references,
            service,
        }
    }

    pub async fn create(&self, command: CreateSpellCommand) -> Result<SpellId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_available(
            self.service.can_create_with_name(&command.name).await?,
            ENTITY,
            command.name.trim(),
        )?;
        self.references.require_classes(&command.class_ids).await?;
        self.references.require_subclasses(&command.subclass_ids).await?;
        self.references
            .require_components(command.components.materials())
            .await?;
        self.references.require_source(command.source_id).await?;

        let spell = Spell::new(
            self.spells.next_id().await?,
            command.name,
            command.description,
            command.next_level_description,
            command.level,
            command.school,
            command.class_ids,
            command.subclass_ids,
            command.casting_time,
            command.duration,
            command.distance,
            command.components,
            command.saving_throws,
            command.damage_types,
            command.concentration,
            command.ritual,
            command.source_id,
        )?;
        self.spells.create(&spell).await?;

        tracing::info!(
            spell_id = %spell.id(),
            name = %spell.name(),
            level = spell.level(),
            "Spell created"
        );
        Ok(spell.id())
    }

    pub async fn update(&self, command: UpdateSpellCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut spell = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(spell.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    ENTITY,
                    name.trim(),
                )?;
            }
            spell.new_name(name)?;
        }
        if let Some(description) = changes.description {
            spell.new_description(description)?;
        }
        if let Some(next_level) = changes.next_level_description {
            spell.new_next_level_description(next_level)?;
        }
        if let Some(level) = changes.level {
            spell.new_level(level)?;
        }
        if let Some(school) = changes.school {
            spell.new_school(school)?;
        }
        if let Some(class_ids) = changes.class_ids {
            self.references.require_classes(&class_ids).await?;
            spell.new_class_ids(class_ids)?;
        }
        if let Some(subclass_ids) = changes.subclass_ids {
            self.references.require_subclasses(&subclass_ids).await?;
            spell.new_subclass_ids(subclass_ids)?;
        }
        if let Some(casting_time) = changes.casting_time {
            spell.new_casting_time(casting_time)?;
        }
        if let Some(duration) = changes.duration {
            spell.new_duration(duration)?;
        }
        if let Some(distance) = changes.distance {
            spell.new_distance(distance)?;
        }
        if let Some(components) = changes.components {
            self.references
                .require_components(components.materials())
                .await?;
            spell.new_components(components)?;
        }
        if let Some(saving_throws) = changes.saving_throws {
            spell.new_saving_throws(saving_throws)?;
        }
        if let Some(damage_types) = changes.damage_types {
            spell.new_damage_types(damage_types)?;
        }
        if let Some(concentration) = changes.concentration {
            spell.new_concentration(concentration)?;
        }
        if let Some(ritual) = changes.ritual {
            spell.new_ritual(ritual)?;
        }
        if let Some(source_id) = changes.source_id {
            self.references.require_source(source_id).await?;
            spell.new_source_id(source_id)?;
        }

        self.spells.update(&spell).await?;
        tracing::info!(spell_id = %spell.id(), "Spell updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<SpellId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_found(self.spells.id_exists(command.id).await?, ENTITY, command.id)?;

        self.spells.delete(command.id).await?;
        tracing::info!(spell_id = %command.id, "Spell deleted");
        Ok(())
    }

    pub async fn get(&self, id: SpellId) -> Result<Spell, UseCaseError> {
        self.spells
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(ENTITY, id))
    }

    pub async fn list(&self, filter: SpellFilter) -> Result<Vec<Spell>, UseCaseError> {
        Ok(self.spells.filter(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockCharacterClassRepo, MockMaterialComponentRepo, MockSourceRepo, MockSpellRepo,
        MockSubclassRepo,
    };
    use crate::test_fixtures::{feet, fireball, known_user};

    struct Mocks {
        spells: MockSpellRepo,
        classes: MockCharacterClassRepo,
        subclasses: MockSubclassRepo,
        components: MockMaterialComponentRepo,
        sources: MockSourceRepo,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                spells: MockSpellRepo::new(),
                classes: MockCharacterClassRepo::new(),
                subclasses: MockSubclassRepo::new(),
                components: MockMaterialComponentRepo::new(),
                sources: MockSourceRepo::new(),
            }
        }

        fn crud(self, user_id: UserId) -> SpellCrud {
            let spells: Arc<dyn SpellRepo> = Arc::new(self.spells);
            SpellCrud::new(
                Arc::new(known_user(user_id)),
                spells.clone(),
                SpellReferences {
                    classes: Arc::new(self.classes),
                    subclasses: Arc::new(self.subclasses),
                    components: Arc::new(self.components),
                    sources: Arc::new(self.sources),
                },
                Arc::new(SpellService::new(spells)),
            )
        }
    }

    fn create_light(user_id: UserId, class_ids: Vec<CharacterClassId>) -> CreateSpellCommand {
        CreateSpellCommand {
            user_id,
            name: "Light".to_string(),
            description: "An object sheds bright light".to_string(),
            next_level_description: None,
            level: 0,
            school: SpellSchool::Evocation,
            class_ids,
            subclass_ids: vec![],
            casting_time: CastingTime::action(),
            duration: None,
            distance: feet(0.0),
            components: SpellComponents::new(true, false, false, vec![]).expect("valid"),
            saving_throws: vec![],
            damage_types: vec![],
            concentration: false,
            ritual: false,
            source_id: SourceId::new(),
        }
    }

    #[tokio::test]
    async fn missing_class_is_named_in_error() {
        let user_id = UserId::new();
        let known = CharacterClassId::new();
        let missing = CharacterClassId::new();

        let mut mocks = Mocks::new();
        mocks.spells.expect_name_exists().returning(|_| Ok(false));
        mocks.spells.expect_create().times(0);
        mocks
            .classes
            .expect_id_exists()
            .returning(move |id| Ok(id == known));

        let error = mocks
            .crud(user_id)
            .create(create_light(user_id, vec![known, missing]))
            .await
            .expect_err("missing class");
        assert!(error.is_invalid_data());
        assert!(error.to_string().contains(&missing.to_string()));
    }

    #[tokio::test]
    async fn cantrip_is_created() {
        let user_id = UserId::new();
        let mut mocks = Mocks::new();
        mocks.spells.expect_name_exists().returning(|_| Ok(false));
        mocks.spells.expect_next_id().returning(|| Ok(SpellId::new()));
        mocks
            .spells
            .expect_create()
            .withf(|spell| spell.is_cantrip())
            .times(1)
            .returning(|_| Ok(()));
        mocks.classes.expect_id_exists().returning(|_| Ok(true));
        mocks.sources.expect_id_exists().returning(|_| Ok(true));

        mocks
            .crud(user_id)
            .create(create_light(user_id, vec![CharacterClassId::new()]))
            .await
            .expect("created");
    }

    #[tokio::test]
    async fn new_components_must_exist() {
        let user_id = UserId::new();
        let spell = fireball(SourceId::new());
        let spell_id = spell.id();
        let guano = MaterialComponentId::new();

        let mut mocks = Mocks::new();
        mocks.spells.expect_get().returning(move |_| Ok(Some(spell.clone())));
        mocks.spells.expect_update().times(0);
        mocks.components.expect_id_exists().returning(|_| Ok(false));

        let command = UpdateSpellCommand::new(
            user_id,
            spell_id,
            SpellChanges {
                components: Some(SpellComponents::new(true, true, true, vec![guano]).expect("valid")),
                ..Default::default()
            },
        )
        .expect("has changes");
        let error = mocks.crud(user_id).update(command).await.expect_err("missing");
        assert!(error.is_invalid_data());
    }

    #[tokio::test]
    async fn level_above_nine_is_invalid() {
        let user_id = UserId::new();
        let spell = fireball(SourceId::new());
        let spell_id = spell.id();

        let mut mocks = Mocks::new();
        mocks.spells.expect_get().returning(move |_| Ok(Some(spell.clone())));
        mocks.spells.expect_update().times(0);

        let command = UpdateSpellCommand::new(
            user_id,
            spell_id,
            SpellChanges {
                level: Some(10),
                ..Default::default()
            },
        )
        .expect("has changes");
        let error = mocks.crud(user_id).update(command).await.expect_err("level");
        assert!(error.is_invalid_data());
    }
}
