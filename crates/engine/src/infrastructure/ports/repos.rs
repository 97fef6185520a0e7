//! Repository port traits, one per entity.
//!
//! Every port shares the same shape: `next_id` hands out a fresh identity,
//! `*_exists` answers existence and uniqueness questions, `get` returns
//! `None` for an unknown id, and `create`/`update`/`delete` persist changes.
//! Adapters must reject a `create` or `update` that would break a uniqueness
//! rule with `RepoError::ConstraintViolation`, and an `update` or `delete` of
//! an unknown id with `RepoError::NotFound`.

use async_trait::async_trait;
use compendium_domain::*;

use super::error::RepoError;
use super::filters::{
    ArmorFilter, CharacterClassFilter, ClassFeatureFilter, ClassLevelFilter, FeatFilter,
    MaterialComponentFilter, NameFilter, RaceFilter, SpellFilter, SubclassFeatureFilter,
    SubclassFilter, ToolFilter, WeaponFilter,
};

// =============================================================================
// Users
// =============================================================================

/// Users are created once and never edited; they only act as the actor of
/// other use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn next_id(&self) -> Result<UserId, RepoError>;
    async fn id_exists(&self, id: UserId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: UserId) -> Result<Option<User>, RepoError>;
    async fn filter(&self, filter: &NameFilter) -> Result<Vec<User>, RepoError>;
    async fn create(&self, user: &User) -> Result<(), RepoError>;
}

// =============================================================================
// Globally named entities
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SourceRepo: Send + Sync {
    async fn next_id(&self) -> Result<SourceId, RepoError>;
    async fn id_exists(&self, id: SourceId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: SourceId) -> Result<Option<Source>, RepoError>;
    async fn filter(&self, filter: &NameFilter) -> Result<Vec<Source>, RepoError>;
    async fn create(&self, source: &Source) -> Result<(), RepoError>;
    async fn update(&self, source: &Source) -> Result<(), RepoError>;
    async fn delete(&self, id: SourceId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaterialRepo: Send + Sync {
    async fn next_id(&self) -> Result<MaterialId, RepoError>;
    async fn id_exists(&self, id: MaterialId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: MaterialId) -> Result<Option<Material>, RepoError>;
    async fn filter(&self, filter: &NameFilter) -> Result<Vec<Material>, RepoError>;
    async fn create(&self, material: &Material) -> Result<(), RepoError>;
    async fn update(&self, material: &Material) -> Result<(), RepoError>;
    async fn delete(&self, id: MaterialId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaterialComponentRepo: Send + Sync {
    async fn next_id(&self) -> Result<MaterialComponentId, RepoError>;
    async fn id_exists(&self, id: MaterialComponentId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: MaterialComponentId) -> Result<Option<MaterialComponent>, RepoError>;
    async fn filter(&self, filter: &MaterialComponentFilter) -> Result<Vec<MaterialComponent>, RepoError>;
    async fn create(&self, component: &MaterialComponent) -> Result<(), RepoError>;
    async fn update(&self, component: &MaterialComponent) -> Result<(), RepoError>;
    async fn delete(&self, id: MaterialComponentId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatureTypeRepo: Send + Sync {
    async fn next_id(&self) -> Result<CreatureTypeId, RepoError>;
    async fn id_exists(&self, id: CreatureTypeId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: CreatureTypeId) -> Result<Option<CreatureType>, RepoError>;
    async fn filter(&self, filter: &NameFilter) -> Result<Vec<CreatureType>, RepoError>;
    async fn create(&self, creature_type: &CreatureType) -> Result<(), RepoError>;
    async fn update(&self, creature_type: &CreatureType) -> Result<(), RepoError>;
    async fn delete(&self, id: CreatureTypeId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatureSizeRepo: Send + Sync {
    async fn next_id(&self) -> Result<CreatureSizeId, RepoError>;
    async fn id_exists(&self, id: CreatureSizeId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: CreatureSizeId) -> Result<Option<CreatureSize>, RepoError>;
    async fn filter(&self, filter: &NameFilter) -> Result<Vec<CreatureSize>, RepoError>;
    async fn create(&self, creature_size: &CreatureSize) -> Result<(), RepoError>;
    async fn update(&self, creature_size: &CreatureSize) -> Result<(), RepoError>;
    async fn delete(&self, id: CreatureSizeId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArmorRepo: Send + Sync {
    async fn next_id(&self) -> Result<ArmorId, RepoError>;
    async fn id_exists(&self, id: ArmorId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: ArmorId) -> Result<Option<Armor>, RepoError>;
    async fn filter(&self, filter: &ArmorFilter) -> Result<Vec<Armor>, RepoError>;
    async fn create(&self, armor: &Armor) -> Result<(), RepoError>;
    async fn update(&self, armor: &Armor) -> Result<(), RepoError>;
    async fn delete(&self, id: ArmorId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeaponRepo: Send + Sync {
    async fn next_id(&self) -> Result<WeaponId, RepoError>;
    async fn id_exists(&self, id: WeaponId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: WeaponId) -> Result<Option<Weapon>, RepoError>;
    async fn filter(&self, filter: &WeaponFilter) -> Result<Vec<Weapon>, RepoError>;
    async fn create(&self, weapon: &Weapon) -> Result<(), RepoError>;
    async fn update(&self, weapon: &Weapon) -> Result<(), RepoError>;
    async fn delete(&self, id: WeaponId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToolRepo: Send + Sync {
    async fn next_id(&self) -> Result<ToolId, RepoError>;
    async fn id_exists(&self, id: ToolId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: ToolId) -> Result<Option<Tool>, RepoError>;
    async fn filter(&self, filter: &ToolFilter) -> Result<Vec<Tool>, RepoError>;
    async fn create(&self, tool: &Tool) -> Result<(), RepoError>;
    async fn update(&self, tool: &Tool) -> Result<(), RepoError>;
    async fn delete(&self, id: ToolId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterClassRepo: Send + Sync {
    async fn next_id(&self) -> Result<CharacterClassId, RepoError>;
    async fn id_exists(&self, id: CharacterClassId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: CharacterClassId) -> Result<Option<CharacterClass>, RepoError>;
    async fn filter(&self, filter: &CharacterClassFilter) -> Result<Vec<CharacterClass>, RepoError>;
    async fn create(&self, class: &CharacterClass) -> Result<(), RepoError>;
    async fn update(&self, class: &CharacterClass) -> Result<(), RepoError>;
    async fn delete(&self, id: CharacterClassId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RaceRepo: Send + Sync {
    async fn next_id(&self) -> Result<RaceId, RepoError>;
    async fn id_exists(&self, id: RaceId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: RaceId) -> Result<Option<Race>, RepoError>;
    async fn filter(&self, filter: &RaceFilter) -> Result<Vec<Race>, RepoError>;
    async fn create(&self, race: &Race) -> Result<(), RepoError>;
    async fn update(&self, race: &Race) -> Result<(), RepoError>;
    async fn delete(&self, id: RaceId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeatRepo: Send + Sync {
    async fn next_id(&self) -> Result<FeatId, RepoError>;
    async fn id_exists(&self, id: FeatId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: FeatId) -> Result<Option<Feat>, RepoError>;
    async fn filter(&self, filter: &FeatFilter) -> Result<Vec<Feat>, RepoError>;
    async fn create(&self, feat: &Feat) -> Result<(), RepoError>;
    async fn update(&self, feat: &Feat) -> Result<(), RepoError>;
    async fn delete(&self, id: FeatId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpellRepo: Send + Sync {
    async fn next_id(&self) -> Result<SpellId, RepoError>;
    async fn id_exists(&self, id: SpellId) -> Result<bool, RepoError>;
    async fn name_exists(&self, name: &str) -> Result<bool, RepoError>;
    async fn get(&self, id: SpellId) -> Result<Option<Spell>, RepoError>;
    async fn filter(&self, filter: &SpellFilter) -> Result<Vec<Spell>, RepoError>;
    async fn create(&self, spell: &Spell) -> Result<(), RepoError>;
    async fn update(&self, spell: &Spell) -> Result<(), RepoError>;
    async fn delete(&self, id: SpellId) -> Result<(), RepoError>;
}

// =============================================================================
// Class-scoped entities (uniqueness is per class or per subclass)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubclassRepo: Send + Sync {
    async fn next_id(&self) -> Result<SubclassId, RepoError>;
    async fn id_exists(&self, id: SubclassId) -> Result<bool, RepoError>;
    async fn name_for_class_exists(
        &self,
        class_id: CharacterClassId,
        name: &str,
    ) -> Result<bool, RepoError>;
    async fn get(&self, id: SubclassId) -> Result<Option<Subclass>, RepoError>;
    async fn filter(&self, filter: &SubclassFilter) -> Result<Vec<Subclass>, RepoError>;
    async fn create(&self, subclass: &Subclass) -> Result<(), RepoError>;
    async fn update(&self, subclass: &Subclass) -> Result<(), RepoError>;
    async fn delete(&self, id: SubclassId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassFeatureRepo: Send + Sync {
    async fn next_id(&self) -> Result<ClassFeatureId, RepoError>;
    async fn id_exists(&self, id: ClassFeatureId) -> Result<bool, RepoError>;
    async fn name_for_class_exists(
        &self,
        class_id: CharacterClassId,
        name: &str,
    ) -> Result<bool, RepoError>;
    async fn get(&self, id: ClassFeatureId) -> Result<Option<ClassFeature>, RepoError>;
    async fn filter(&self, filter: &ClassFeatureFilter) -> Result<Vec<ClassFeature>, RepoError>;
    async fn create(&self, feature: &ClassFeature) -> Result<(), RepoError>;
    async fn update(&self, feature: &ClassFeature) -> Result<(), RepoError>;
    async fn delete(&self, id: ClassFeatureId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubclassFeatureRepo: Send + Sync {
    async fn next_id(&self) -> Result<SubclassFeatureId, RepoError>;
    async fn id_exists(&self, id: SubclassFeatureId) -> Result<bool, RepoError>;
    async fn name_for_subclass_exists(
        &self,
        subclass_id: SubclassId,
        name: &str,
    ) -> Result<bool, RepoError>;
    async fn get(&self, id: SubclassFeatureId) -> Result<Option<SubclassFeature>, RepoError>;
    async fn filter(&self, filter: &SubclassFeatureFilter) -> Result<Vec<SubclassFeature>, RepoError>;
    async fn create(&self, feature: &SubclassFeature) -> Result<(), RepoError>;
    async fn update(&self, feature: &SubclassFeature) -> Result<(), RepoError>;
    async fn delete(&self, id: SubclassFeatureId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassLevelRepo: Send + Sync {
    async fn next_id(&self) -> Result<ClassLevelId, RepoError>;
    async fn id_exists(&self, id: ClassLevelId) -> Result<bool, RepoError>;
    async fn level_of_class_exists(
        &self,
        class_id: CharacterClassId,
        level: u8,
    ) -> Result<bool, RepoError>;
    async fn get(&self, id: ClassLevelId) -> Result<Option<ClassLevel>, RepoError>;
    async fn filter(&self, filter: &ClassLevelFilter) -> Result<Vec<ClassLevel>, RepoError>;
    async fn create(&self, class_level: &ClassLevel) -> Result<(), RepoError>;
    async fn update(&self, class_level: &ClassLevel) -> Result<(), RepoError>;
    async fn delete(&self, id: ClassLevelId) -> Result<(), RepoError>;
}
