//! Port traits for infrastructure boundaries.
//!
//! Repositories are the only abstraction in the engine. Everything else is
//! concrete types wired together in `App`.

mod error;
mod filters;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{
    ArmorRepo, CharacterClassRepo, ClassFeatureRepo, ClassLevelRepo, CreatureSizeRepo,
    CreatureTypeRepo, FeatRepo, MaterialComponentRepo, MaterialRepo, RaceRepo, SourceRepo,
    SpellRepo, SubclassFeatureRepo, SubclassRepo, ToolRepo, UserRepo, WeaponRepo,
};

// =============================================================================
// Filter Criteria
// =============================================================================
pub use filters::{
    ArmorFilter, CharacterClassFilter, ClassFeatureFilter, ClassLevelFilter, Criteria, FeatFilter,
    MaterialComponentFilter, NameFilter, RaceFilter, SpellFilter, SubclassFeatureFilter,
    SubclassFilter, ToolFilter, WeaponFilter,
};

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{
    MockArmorRepo, MockCharacterClassRepo, MockClassFeatureRepo, MockClassLevelRepo,
    MockCreatureSizeRepo, MockCreatureTypeRepo, MockFeatRepo, MockMaterialComponentRepo,
    MockMaterialRepo, MockRaceRepo, MockSourceRepo, MockSpellRepo, MockSubclassFeatureRepo,
    MockSubclassRepo, MockToolRepo, MockUserRepo, MockWeaponRepo,
};

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
