//! Closed vocabularies of the ruleset.
//!
//! Every vocabulary is a plain enum backed by a lookup table of
//! `(variant, key, display name)` rows. Keys are the canonical
//! SCREAMING_SNAKE_CASE spelling used on the wire; parsing is
//! case-insensitive on the key and fails with `DomainError::InvalidData`
//! for anything else.

/// Declares a closed vocabulary enum with its lookup table.
///
/// Generates `ALL`, `key()`, `display_name()`, `parse()`, `Display`
/// (the key), `FromStr`, and string-based serde.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($label:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($key:literal, $display:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            const TABLE: &'static [($name, &'static str, &'static str)] =
                &[$(($name::$variant, $key, $display)),+];

            /// Canonical key (e.g. "HEAVY_ARMOR").
            pub fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            /// Human-readable label.
            pub fn display_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $display,)+
                }
            }

            /// Parses a canonical key, ignoring case and surrounding whitespace.
            pub fn parse(value: &str) -> Result<Self, $crate::error::DomainError> {
                let value = value.trim();
                Self::TABLE
                    .iter()
                    .find(|(_, key, _)| key.eq_ignore_ascii_case(value))
                    .map(|(variant, _, _)| *variant)
                    .ok_or_else(|| {
                        $crate::error::DomainError::invalid_data(format!(
                            "Unknown {}: {}",
                            $label, value
                        ))
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.key().to_string()
            }
        }
    };
}

mod armor_type;
mod damage_type;
mod dice_type;
mod modifier;
mod piece_type;
mod spell_school;
mod tool_type;
mod units;
mod weapon;

pub use armor_type::ArmorType;
pub use damage_type::DamageType;
pub use dice_type::DiceType;
pub use modifier::Modifier;
pub use piece_type::PieceType;
pub use spell_school::SpellSchool;
pub use tool_type::ToolType;
pub use units::{CastingTimeUnit, LengthUnit, TimeUnit, WeightUnit};
pub use weapon::{WeaponProperty, WeaponType};
