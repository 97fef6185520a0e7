//! Use cases - the callable surface of the compendium.
//!
//! One `XCrud` per entity with `create`, `update`, `delete`, `get` and
//! `list`. Mutations take a command carrying the acting user's id and fail
//! with `UseCaseError::Access` for unknown actors; reads need no actor.
//! Persistence is always the last step, so a rejected command leaves the
//! store untouched.

pub mod armor;
pub mod character_class;
pub mod class_feature;
pub mod class_level;
pub mod command;
pub mod creature;
pub mod error;
pub mod feat;
pub mod material;
pub mod race;
pub mod seed;
pub mod source;
pub mod spell;
pub mod subclass;
pub mod tool;
pub mod user;
pub mod weapon;

mod validation;

pub use armor::{ArmorChanges, ArmorCrud, CreateArmorCommand, UpdateArmorCommand};
pub use character_class::{
    CharacterClassChanges, CharacterClassCrud, ClassDependents, CreateCharacterClassCommand,
    UpdateCharacterClassCommand,
};
pub use class_feature::{
    ClassFeatureCrud, CreateClassFeatureCommand, CreateSubclassFeatureCommand, FeatureChanges,
    SubclassFeatureCrud, UpdateClassFeatureCommand, UpdateSubclassFeatureCommand,
};
pub use class_level::{
    ClassLevelChanges, ClassLevelCrud, CreateClassLevelCommand, UpdateClassLevelCommand,
};
pub use command::{Changes, DeleteCommand, UpdateCommand};
pub use creature::{
    CreateCreatureSizeCommand, CreateCreatureTypeCommand, CreatureSizeChanges, CreatureSizeCrud,
    CreatureTypeChanges, CreatureTypeCrud, UpdateCreatureSizeCommand, UpdateCreatureTypeCommand,
};
pub use error::UseCaseError;
pub use feat::{CreateFeatCommand, FeatChanges, FeatCrud, UpdateFeatCommand};
pub use material::{
    CreateMaterialCommand, CreateMaterialComponentCommand, MaterialChanges,
    MaterialComponentChanges, MaterialComponentCrud, MaterialCrud, UpdateMaterialCommand,
    UpdateMaterialComponentCommand,
};
pub use race::{CreateRaceCommand, RaceChanges, RaceCrud, RaceReferences, UpdateRaceCommand};
pub use seed::{SeedDocument, SeedError, SeedImporter, SeedSummary};
pub use source::{CreateSourceCommand, SourceChanges, SourceCrud, UpdateSourceCommand};
pub use spell::{CreateSpellCommand, SpellChanges, SpellCrud, SpellReferences, UpdateSpellCommand};
pub use subclass::{CreateSubclassCommand, SubclassChanges, SubclassCrud, UpdateSubclassCommand};
pub use tool::{CreateToolCommand, ToolChanges, ToolCrud, UpdateToolCommand};
pub use user::{CreateUserCommand, UserCrud};
pub use weapon::{CreateWeaponCommand, UpdateWeaponCommand, WeaponChanges, WeaponCrud};
