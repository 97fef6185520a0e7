//! Domain services - stateless predicates answered by one repository.
//!
//! Use cases ask these before creating or renaming, so the name-scoped
//! question has one place to live regardless of how the store answers it.
//! The repository's own constraint check remains the final word.

mod class_scoped;
mod name_scoped;

pub use class_scoped::{ClassFeatureService, ClassLevelService, SubclassFeatureService, SubclassService};
pub use name_scoped::{
    ArmorService, CharacterClassService, CreatureSizeService, CreatureTypeService, FeatService,
    MaterialComponentService, MaterialService, RaceService, SourceService, SpellService,
    ToolService, UserService, WeaponService,
};
