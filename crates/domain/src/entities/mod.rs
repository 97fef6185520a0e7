//! Entities - identity-bearing records of the compendium.
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state is only reachable through accessors
//! - **Valid by construction**: `new()` runs every field validator
//! - **Checked mutators**: `new_<field>()` re-validates and rejects no-op changes
//!   with `DomainError::Idempotent`
//! - **Identity equality**: two entities are equal iff their ids match
//!
//! Mutators never look at other entities. Cross-entity rules (does the
//! referenced material exist, is the name taken) belong to the use cases.

/// Implements identity equality for an entity with an `id` field.
macro_rules! impl_identity {
    ($entity:ident, $id:ident) => {
        impl PartialEq for $entity {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $entity {}

        impl std::hash::Hash for $entity {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }

        impl PartialEq<$id> for $entity {
            fn eq(&self, other: &$id) -> bool {
                self.id == *other
            }
        }

        impl PartialEq<uuid::Uuid> for $entity {
            fn eq(&self, other: &uuid::Uuid) -> bool {
                self.id == *other
            }
        }
    };
}

mod armor;
mod character_class;
mod class_feature;
mod class_level;
mod creature;
mod feat;
mod material;
mod race;
mod source;
mod spell;
mod subclass;
mod tool;
mod user;
mod weapon;

pub use armor::Armor;
pub use character_class::CharacterClass;
pub use class_feature::{ClassFeature, SubclassFeature};
pub use class_level::ClassLevel;
pub use creature::{CreatureSize, CreatureType};
pub use feat::Feat;
pub use material::{Material, MaterialComponent};
pub use race::Race;
pub use source::Source;
pub use spell::Spell;
pub use subclass::Subclass;
pub use tool::Tool;
pub use user::User;
pub use weapon::Weapon;
