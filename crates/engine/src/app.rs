//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::memory::{
    InMemoryArmorRepo, InMemoryCharacterClassRepo, InMemoryClassFeatureRepo,
    InMemoryClassLevelRepo, InMemoryCreatureSizeRepo, InMemoryCreatureTypeRepo,
    InMemoryFeatRepo, InMemoryMaterialComponentRepo, InMemoryMaterialRepo, InMemoryRaceRepo,
    InMemorySourceRepo, InMemorySpellRepo, InMemorySubclassFeatureRepo, InMemorySubclassRepo,
    InMemoryToolRepo, InMemoryUserRepo, InMemoryWeaponRepo,
};
use crate::infrastructure::ports::{
    ArmorRepo, CharacterClassRepo, ClassFeatureRepo, ClassLevelRepo, CreatureSizeRepo,
    CreatureTypeRepo, FeatRepo, MaterialComponentRepo, MaterialRepo, RaceRepo, SourceRepo,
    SpellRepo, SubclassFeatureRepo, SubclassRepo, ToolRepo, UserRepo, WeaponRepo,
};
use crate::services;
use crate::use_cases;

/// Main application state.
///
/// Holds the repository ports and every use case built on top of them.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all repository ports.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepo>,
    pub sources: Arc<dyn SourceRepo>,
    pub materials: Arc<dyn MaterialRepo>,
    pub material_components: Arc<dyn MaterialComponentRepo>,
    pub creature_types: Arc<dyn CreatureTypeRepo>,
    pub creature_sizes: Arc<dyn CreatureSizeRepo>,
    pub armors: Arc<dyn ArmorRepo>,
    pub weapons: Arc<dyn WeaponRepo>,
    pub tools: Arc<dyn ToolRepo>,
    pub classes: Arc<dyn CharacterClassRepo>,
    pub subclasses: Arc<dyn SubclassRepo>,
    pub class_features: Arc<dyn ClassFeatureRepo>,
    pub subclass_features: Arc<dyn SubclassFeatureRepo>,
    pub class_levels: Arc<dyn ClassLevelRepo>,
    pub races: Arc<dyn RaceRepo>,
    pub feats: Arc<dyn FeatRepo>,
    pub spells: Arc<dyn SpellRepo>,
}

impl Repositories {
    /// Every port backed by a fresh, empty in-memory table.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            sources: Arc::new(InMemorySourceRepo::new()),
            materials: Arc::new(InMemoryMaterialRepo::new()),
            material_components: Arc::new(InMemoryMaterialComponentRepo::new()),
            creature_types: Arc::new(InMemoryCreatureTypeRepo::new()),
            creature_sizes: Arc::new(InMemoryCreatureSizeRepo::new()),
            armors: Arc::new(InMemoryArmorRepo::new()),
            weapons: Arc::new(InMemoryWeaponRepo::new()),
            tools: Arc::new(InMemoryToolRepo::new()),
            classes: Arc::new(InMemoryCharacterClassRepo::new()),
            subclasses: Arc::new(InMemorySubclassRepo::new()),
            class_features: Arc::new(InMemoryClassFeatureRepo::new()),
            subclass_features: Arc::new(InMemorySubclassFeatureRepo::new()),
            class_levels: Arc::new(InMemoryClassLevelRepo::new()),
            races: Arc::new(InMemoryRaceRepo::new()),
            feats: Arc::new(InMemoryFeatRepo::new()),
            spells: Arc::new(InMemorySpellRepo::new()),
        }
    }
}

/// Container for all use cases.
pub struct UseCases {
    pub users: Arc<use_cases::UserCrud>,
    pub sources: Arc<use_cases::SourceCrud>,
    pub materials: Arc<use_cases::MaterialCrud>,
    pub material_components: Arc<use_cases::MaterialComponentCrud>,
    pub creature_types: Arc<use_cases::CreatureTypeCrud>,
    pub creature_sizes: Arc<use_cases::CreatureSizeCrud>,
    pub armors: Arc<use_cases::ArmorCrud>,
    pub weapons: Arc<use_cases::WeaponCrud>,
    pub tools: Arc<use_cases::ToolCrud>,
    pub classes: Arc<use_cases::CharacterClassCrud>,
    pub subclasses: Arc<use_cases::SubclassCrud>,
    pub class_features: Arc<use_cases::ClassFeatureCrud>,
    pub subclass_features: Arc<use_cases::SubclassFeatureCrud>,
    pub class_levels: Arc<use_cases::ClassLevelCrud>,
    pub races: Arc<use_cases::RaceCrud>,
    pub feats: Arc<use_cases::FeatCrud>,
    pub spells: Arc<use_cases::SpellCrud>,
    pub seed: Arc<use_cases::SeedImporter>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repos: Repositories) -> Self {
        let users = Arc::new(use_cases::UserCrud::new(
            repos.users.clone(),
            Arc::new(services::UserService::new(repos.users.clone())),
        ));
        let sources = Arc::new(use_cases::SourceCrud::new(
            repos.users.clone(),
            repos.sources.clone(),
            repos.classes.clone(),
            repos.races.clone(),
            repos.feats.clone(),
            repos.spells.clone(),
            Arc::new(services::SourceService::new(repos.sources.clone())),
        ));
        let materials = Arc::new(use_cases::MaterialCrud::new(
            repos.users.clone(),
            repos.materials.clone(),
            repos.armors.clone(),
            repos.weapons.clone(),
            Arc::new(services::MaterialService::new(repos.materials.clone())),
        ));
        let material_components = Arc::new(use_cases::MaterialComponentCrud::new(
            repos.users.clone(),
            repos.material_components.clone(),
            repos.spells.clone(),
            Arc::new(services::MaterialComponentService::new(
                repos.material_components.clone(),
            )),
        ));
        let creature_types = Arc::new(use_cases::CreatureTypeCrud::new(
            repos.users.clone(),
            repos.creature_types.clone(),
            repos.races.clone(),
            Arc::new(services::CreatureTypeService::new(repos.creature_types.clone())),
        ));
        let creature_sizes = Arc::new(use_cases::CreatureSizeCrud::new(
            repos.users.clone(),
            repos.creature_sizes.clone(),
            repos.races.clone(),
            Arc::new(services::CreatureSizeService::new(repos.creature_sizes.clone())),
        ));
        let armors = Arc::new(use_cases::ArmorCrud::new(
            repos.users.clone(),
            repos.armors.clone(),
            repos.materials.clone(),
            Arc::new(services::ArmorService::new(repos.armors.clone())),
        ));
        let weapons = Arc::new(use_cases::WeaponCrud::new(
            repos.users.clone(),
            repos.weapons.clone(),
            repos.materials.clone(),
            Arc::new(services::WeaponService::new(repos.weapons.clone())),
        ));
        let tools = Arc::new(use_cases::ToolCrud::new(
            repos.users.clone(),
            repos.tools.clone(),
            Arc::new(services::ToolService::new(repos.tools.clone())),
        ));
        let classes = Arc::new(use_cases::CharacterClassCrud::new(
            repos.users.clone(),
            repos.classes.clone(),
            repos.sources.clone(),
            use_cases::ClassDependents {
                subclasses: repos.subclasses.clone(),
                features: repos.class_features.clone(),
                levels: repos.class_levels.clone(),
                spells: repos.spells.clone(),
            },
            Arc::new(services::CharacterClassService::new(repos.classes.clone())),
        ));
        let subclasses = Arc::new(use_cases::SubclassCrud::new(
            repos.users.clone(),
            repos.subclasses.clone(),
            repos.classes.clone(),
            repos.subclass_features.clone(),
            repos.spells.clone(),
            Arc::new(services::SubclassService::new(repos.subclasses.clone())),
        ));
        let class_features = Arc::new(use_cases::ClassFeatureCrud::new(
            repos.users.clone(),
            repos.class_features.clone(),
            repos.classes.clone(),
            Arc::new(services::ClassFeatureService::new(repos.class_features.clone())),
        ));
        let subclass_features = Arc::new(use_cases::SubclassFeatureCrud::new(
            repos.users.clone(),
            repos.subclass_features.clone(),
            repos.subclasses.clone(),
            Arc::new(services::SubclassFeatureService::new(
                repos.subclass_features.clone(),
            )),
        ));
        let class_levels = Arc::new(use_cases::ClassLevelCrud::new(
            repos.users.clone(),
            repos.class_levels.clone(),
            repos.classes.clone(),
            Arc::new(services::ClassLevelService::new(repos.class_levels.clone())),
        ));
        let races = Arc::new(use_cases::RaceCrud::new(
            repos.users.clone(),
            repos.races.clone(),
            use_cases::RaceReferences {
                creature_types: repos.creature_types.clone(),
                creature_sizes: repos.creature_sizes.clone(),
                sources: repos.sources.clone(),
            },
            Arc::new(services::RaceService::new(repos.races.clone())),
        ));
        let feats = Arc::new(use_cases::FeatCrud::new(
            repos.users.clone(),
            repos.feats.clone(),
            repos.sources.clone(),
            Arc::new(services::FeatService::new(repos.feats.clone())),
        ));
        let spells = Arc::new(use_cases::SpellCrud::new(
            repos.users.clone(),
            repos.spells.clone(),
            use_cases::SpellReferences {
                classes: repos.classes.clone(),
                subclasses: repos.subclasses.clone(),
                components: repos.material_components.clone(),
                sources: repos.sources.clone(),
            },
            Arc::new(services::SpellService::new(repos.spells.clone())),
        ));

        let seed = Arc::new(use_cases::SeedImporter::new(
            users.clone(),
            sources.clone(),
            materials.clone(),
            material_components.clone(),
            creature_types.clone(),
            creature_sizes.clone(),
        ));

        let use_cases = UseCases {
            users,
            sources,
            materials,
            material_components,
            creature_types,
            creature_sizes,
            armors,
            weapons,
            tools,
            classes,
            subclasses,
            class_features,
            subclass_features,
            class_levels,
            races,
            feats,
            spells,
            seed,
        };

        Self {
            repositories: repos,
            use_cases,
        }
    }
}
