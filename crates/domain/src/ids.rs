use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<Uuid> for $name {
            fn eq(&self, other: &Uuid) -> bool {
                self.0 == *other
            }
        }
    };
}

// Actors
define_id!(UserId);

// Reference vocabularies
define_id!(SourceId);
define_id!(MaterialId);
define_id!(MaterialComponentId);
define_id!(CreatureTypeId);
define_id!(CreatureSizeId);

// Equipment
define_id!(ArmorId);
define_id!(WeaponId);
define_id!(ToolId);

// Classes and progression
define_id!(CharacterClassId);
define_id!(SubclassId);
define_id!(ClassFeatureId);
define_id!(SubclassFeatureId);
define_id!(ClassLevelId);

// Character options
define_id!(RaceId);
define_id!(FeatId);
define_id!(SpellId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_compare_with_raw_uuid() {
        let uuid = Uuid::new_v4();
        let id = ArmorId::from_uuid(uuid);
        assert_eq!(id, uuid);
        assert_eq!(Uuid::from(id), uuid);
        assert_ne!(ArmorId::new(), uuid);
    }

    #[test]
    fn ids_serialize_as_plain_uuid() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_string(&SpellId::from(uuid)).expect("serialize");
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}
