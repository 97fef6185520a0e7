//! Value objects - immutable, self-validating, compared by value.
//!
//! Quantities with several display units (`Coins`, `Weight`, `Length`,
//! `GameTime`) store one canonical unit and expose one accessor per unit.
//! A "change" to a value object is always the construction of a new one.

mod armor_class;
mod coins;
mod dice;
mod measures;
mod modifier_values;
mod names;
mod spell_details;
mod weapon_stats;

pub use armor_class::ArmorClass;
pub use coins::Coins;
pub use dice::Dice;
pub use measures::{GameTime, Length, Weight};
pub use modifier_values::{ModifierBonus, ModifierRequirement};
pub use names::{Description, Name, MAX_NAME_LENGTH};
pub use spell_details::{CastingTime, SpellComponents};
pub use weapon_stats::{WeaponDamage, WeaponRange};
