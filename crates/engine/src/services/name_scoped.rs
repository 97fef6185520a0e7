//! Services for entities whose names are unique across the whole compendium.

use std::sync::Arc;

use crate::infrastructure::ports::{
    ArmorRepo, CharacterClassRepo, CreatureSizeRepo, CreatureTypeRepo, FeatRepo,
    MaterialComponentRepo, MaterialRepo, RaceRepo, RepoError, SourceRepo, SpellRepo, ToolRepo,
    UserRepo, WeaponRepo,
};

macro_rules! name_scoped_service {
    ($(#[$meta:meta])* $service:ident, $port:ident) => {
        $(#[$meta])*
        pub struct $service {
            repo: Arc<dyn $port>,
        }

        impl $service {
            pub fn new(repo: Arc<dyn $port>) -> Self {
                Self { repo }
            }

            /// True when no existing record uses `name`.
            pub async fn can_create_with_name(&self, name: &str) -> Result<bool, RepoError> {
                Ok(!self.repo.name_exists(name).await?)
            }

            /// True when `name` is free to be taken by a rename.
            pub async fn can_rename_with_name(&self, name: &str) -> Result<bool, RepoError> {
                Ok(!self.repo.name_exists(name).await?)
            }
        }
    };
}

name_scoped_service!(UserService, UserRepo);
name_scoped_service!(SourceService, SourceRepo);
name_scoped_service!(MaterialService, MaterialRepo);
name_scoped_service!(MaterialComponentService, MaterialComponentRepo);
name_scoped_service!(CreatureTypeService, CreatureTypeRepo);
name_scoped_service!(CreatureSizeService, CreatureSizeRepo);
name_scoped_service!(ArmorService, ArmorRepo);
name_scoped_service!(WeaponService, WeaponRepo);
name_scoped_service!(ToolService, ToolRepo);
name_scoped_service!(
    /// Character class names are global; subclass names are scoped per class
    /// (see `SubclassService`).
    CharacterClassService,
    CharacterClassRepo
);
name_scoped_service!(RaceService, RaceRepo);
name_scoped_service!(FeatService, FeatRepo);
name_scoped_service!(SpellService, SpellRepo);
