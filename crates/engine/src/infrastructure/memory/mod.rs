//! In-memory repository adapters.
//!
//! Backs the binary and the end-to-end tests. Each repository owns one
//! [`Table`]; uniqueness rules are re-checked inside `create`/`update` under
//! the table's write lock and reported as `RepoError::ConstraintViolation`.

mod table;

use async_trait::async_trait;
use compendium_domain::*;

use crate::infrastructure::ports::*;
use table::{Record, Table};

/// Implements [`Record`] for an entity that is unique by name.
macro_rules! named_record {
    ($entity:ident, $id:ident, $label:literal) => {
        impl Record for $entity {
            type Id = $id;

            const ENTITY_TYPE: &'static str = $label;

            fn record_id(&self) -> $id {
                self.id()
            }

            fn unique_key(&self) -> String {
                self.name().to_string()
            }
        }
    };
}

named_record!(User, UserId, "User");
named_record!(Source, SourceId, "Source");
named_record!(Material, MaterialId, "Material");
named_record!(MaterialComponent, MaterialComponentId, "MaterialComponent");
named_record!(CreatureType, CreatureTypeId, "CreatureType");
named_record!(CreatureSize, CreatureSizeId, "CreatureSize");
named_record!(Armor, ArmorId, "Armor");
named_record!(Weapon, WeaponId, "Weapon");
named_record!(Tool, ToolId, "Tool");
named_record!(CharacterClass, CharacterClassId, "CharacterClass");
named_record!(Race, RaceId, "Race");
named_record!(Feat, FeatId, "Feat");
named_record!(Spell, SpellId, "Spell");

impl Record for Subclass {
    type Id = SubclassId;

    const ENTITY_TYPE: &'static str = "Subclass";

    fn record_id(&self) -> SubclassId {
        self.id()
    }

    fn unique_key(&self) -> String {
        format!("{}/{}", self.class_id(), self.name())
    }
}

impl Record for ClassFeature {
    type Id = ClassFeatureId;

    const ENTITY_TYPE: &'static str = "ClassFeature";

    fn record_id(&self) -> ClassFeatureId {
        self.id()
    }

    fn unique_key(&self) -> String {
        format!("{}/{}", self.class_id(), self.name())
    }
}

impl Record for SubclassFeature {
    type Id = SubclassFeatureId;

    const ENTITY_TYPE: &'static str = "SubclassFeature";

    fn record_id(&self) -> SubclassFeatureId {
        self.id()
    }

    fn unique_key(&self) -> String {
        format!("{}/{}", self.subclass_id(), self.name())
    }
}

impl Record for ClassLevel {
    type Id = ClassLevelId;

    const ENTITY_TYPE: &'static str = "ClassLevel";

    fn record_id(&self) -> ClassLevelId {
        self.id()
    }

    fn unique_key(&self) -> String {
        // Zero-padded so listings sort by level within a class.
        format!("{}/{:02}", self.class_id(), self.level())
    }
}

// =============================================================================
// Users
// =============================================================================

#[derive(Default)]
pub struct InMemoryUserRepo {
    table: Table<User>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepo for InMemoryUserRepo {
    async fn next_id(&self) -> Result<UserId, RepoError> {
        Ok(UserId::new())
    }

    async fn id_exists(&self, id: UserId) -> Result<bool, RepoError> {
        Ok(self.table.contains(id).await)
    }

    async fn name_exists(&self, name: &str) -> Result<bool, RepoError> {
        let name = name.trim();
        Ok(self.table.any(|user| user.name() == name).await)
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, RepoError> {
        Ok(self.table.get(id).await)
    }

    async fn filter(&self, filter: &NameFilter) -> Result<Vec<User>, RepoError> {
        Ok(self.table.select(|user| filter.matches(user)).await)
    }

    async fn create(&self, user: &User) -> Result<(), RepoError> {
        self.table.insert(user).await
    }
}

// =============================================================================
// Globally named entities
// =============================================================================

/// Defines an in-memory repository for an entity unique by name.
macro_rules! named_repo {
    ($repo:ident, $port:ident, $entity:ident, $id:ident, $filter:ident) => {
        #[derive(Default)]
        pub struct $repo {
            table: Table<$entity>,
        }

        impl $repo {
            pub fn new() -> Self {
                Self::default()
            }
        }

        #[async_trait]
        impl $port for $repo {
            async fn next_id(&self) -> Result<$id, RepoError> {
                Ok($id::new())
            }

            async fn id_exists(&self, id: $id) -> Result<bool, RepoError> {
                Ok(self.table.contains(id).await)
            }

            async fn name_exists(&self, name: &str) -> Result<bool, RepoError> {
                let name = name.trim();
                Ok(self.table.any(|row| row.name() == name).await)
            }

            async fn get(&self, id: $id) -> Result<Option<$entity>, RepoError> {
                Ok(self.table.get(id).await)
            }

            async fn filter(&self, filter: &$filter) -> Result<Vec<$entity>, RepoError> {
                Ok(self.table.select(|row| filter.matches(row)).await)
            }

            async fn create(&self, row: &$entity) -> Result<(), RepoError> {
                self.table.insert(row).await
            }

            async fn update(&self, row: &$entity) -> Result<(), RepoError> {
                self.table.replace(row).await
            }

            async fn delete(&self, id: $id) -> Result<(), RepoError> {
                self.table.remove(id).await
            }
        }
    };
}

named_repo!(InMemorySourceRepo, SourceRepo, Source, SourceId, NameFilter);
named_repo!(InMemoryMaterialRepo, MaterialRepo, Material, MaterialId, NameFilter);
named_repo!(
    InMemoryMaterialComponentRepo,
    MaterialComponentRepo,
    MaterialComponent,
    MaterialComponentId,
    MaterialComponentFilter
);
named_repo!(InMemoryCreatureTypeRepo, CreatureTypeRepo, CreatureType, CreatureTypeId, NameFilter);
named_repo!(InMemoryCreatureSizeRepo, CreatureSizeRepo, CreatureSize, CreatureSizeId, NameFilter);
named_repo!(InMemoryArmorRepo, ArmorRepo, Armor, ArmorId, ArmorFilter);
named_repo!(InMemoryWeaponRepo, WeaponRepo, Weapon, WeaponId, WeaponFilter);
named_repo!(InMemoryToolRepo, ToolRepo, Tool, ToolId, ToolFilter);
named_repo!(
    InMemoryCharacterClassRepo,
    CharacterClassRepo,
    CharacterClass,
    CharacterClassId,
    CharacterClassFilter
);
named_repo!(InMemoryRaceRepo, RaceRepo, Race, RaceId, RaceFilter);
named_repo!(InMemoryFeatRepo, FeatRepo, Feat, FeatId, FeatFilter);
named_repo!(InMemorySpellRepo, SpellRepo, Spell, SpellId, SpellFilter);

// =============================================================================
// Class-scoped entities
// =============================================================================

/// Defines an in-memory repository whose uniqueness is scoped to a parent id.
macro_rules! scoped_repo {
    (
        $repo:ident, $port:ident, $entity:ident, $id:ident, $filter:ident,
        fn $exists:ident($parent:ident: $parent_ty:ty, $key:ident: $key_ty:ty) => $matches:expr
    ) => {
        #[derive(Default)]
        pub struct $repo {
            table: Table<$entity>,
        }

        impl $repo {
            pub fn new() -> Self {
                Self::default()
            }
        }

        #[async_trait]
        impl $port for $repo {
            async fn next_id(&self) -> Result<$id, RepoError> {
                Ok($id::new())
            }

            async fn id_exists(&self, id: $id) -> Result<bool, RepoError> {
                Ok(self.table.contains(id).await)
            }

            async fn $exists(&self, $parent: $parent_ty, $key: $key_ty) -> Result<bool, RepoError> {
                let matches: fn(&$entity, $parent_ty, $key_ty) -> bool = $matches;
                Ok(self.table.any(|row| matches(row, $parent, $key)).await)
            }

            async fn get(&self, id: $id) -> Result<Option<$entity>, RepoError> {
                Ok(self.table.get(id).await)
            }

            async fn filter(&self, filter: &$filter) -> Result<Vec<$entity>, RepoError> {
                Ok(self.table.select(|row| filter.matches(row)).await)
            }

            async fn create(&self, row: &$entity) -> Result<(), RepoError> {
                self.table.insert(row).await
            }

            async fn update(&self, row: &$entity) -> Result<(), RepoError> {
                self.table.replace(row).await
            }

            async fn delete(&self, id: $id) -> Result<(), RepoError> {
                self.table.remove(id).await
            }
        }
    };
}

scoped_repo!(
    InMemorySubclassRepo, SubclassRepo, Subclass, SubclassId, SubclassFilter,
    fn name_for_class_exists(class_id: CharacterClassId, name: &str) =>
        |row, class_id, name| row.class_id() == class_id && row.name() == name.trim()
);
scoped_repo!(
    InMemoryClassFeatureRepo, ClassFeatureRepo, ClassFeature, ClassFeatureId, ClassFeatureFilter,
    fn name_for_class_exists(class_id: CharacterClassId, name: &str) =>
        |row, class_id, name| row.class_id() == class_id && row.name() == name.trim()
);
scoped_repo!(
    InMemorySubclassFeatureRepo, SubclassFeatureRepo, SubclassFeature, SubclassFeatureId,
    SubclassFeatureFilter,
    fn name_for_subclass_exists(subclass_id: SubclassId, name: &str) =>
        |row, subclass_id, name| row.subclass_id() == subclass_id && row.name() == name.trim()
);
scoped_repo!(
    InMemoryClassLevelRepo, ClassLevelRepo, ClassLevel, ClassLevelId, ClassLevelFilter,
    fn level_of_class_exists(class_id: CharacterClassId, level: u8) =>
        |row, class_id, level| row.class_id() == class_id && row.level() == level
);
