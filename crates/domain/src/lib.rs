//! Compendium domain: value objects, enumerations and entities for
//! tabletop ruleset reference data.
//!
//! This crate has no I/O. Everything here validates on construction and
//! reports failures as [`DomainError`]; persistence and cross-entity checks
//! live in `compendium-engine`.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod types;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    Armor, CharacterClass, ClassFeature, ClassLevel, CreatureSize, CreatureType, Feat, Material,
    MaterialComponent, Race, Source, Spell, Subclass, SubclassFeature, Tool, User, Weapon,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{
    ArmorId, CharacterClassId, ClassFeatureId, ClassLevelId, CreatureSizeId, CreatureTypeId,
    FeatId, MaterialComponentId, MaterialId, RaceId, SourceId, SpellId, SubclassFeatureId,
    SubclassId, ToolId, UserId, WeaponId,
};

// Re-export enumerations
pub use types::{
    ArmorType, CastingTimeUnit, DamageType, DiceType, LengthUnit, Modifier, PieceType,
    SpellSchool, TimeUnit, ToolType, WeaponProperty, WeaponType, WeightUnit,
};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    ArmorClass, CastingTime, Coins, Description, Dice, GameTime, Length, ModifierBonus,
    ModifierRequirement, Name, SpellComponents, WeaponDamage, WeaponRange, Weight,
    MAX_NAME_LENGTH,
};
