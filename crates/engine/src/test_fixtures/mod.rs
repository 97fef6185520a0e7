//! Test fixtures: entity builders and mock setups shared by unit tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{known_user, plate};
//!
//! let users = known_user(user_id);
//! let armor = plate(material_id);
//! ```

use compendium_domain::{
    Armor, ArmorClass, ArmorId, ArmorType, CastingTime, CharacterClass, CharacterClassId, Coins,
    CreatureSizeId, CreatureTypeId, DamageType, Dice, DiceType, Length, LengthUnit, MaterialId,
    Modifier, ModifierBonus, PieceType, Race, RaceId, SourceId, Spell, SpellComponents, SpellId,
    SpellSchool, UserId, Weapon, WeaponDamage, WeaponId, WeaponProperty, WeaponType, Weight,
    WeightUnit,
};

use crate::infrastructure::ports::MockUserRepo;

// =============================================================================
// Actors
// =============================================================================

/// A user repo that knows exactly `user_id`.
pub fn known_user(user_id: UserId) -> MockUserRepo {
    let mut users = MockUserRepo::new();
    users
        .expect_id_exists()
        .returning(move |id| Ok(id == user_id));
    users
}

/// A user repo that knows nobody, `user_id` included.
pub fn unknown_user(user_id: UserId) -> MockUserRepo {
    let mut users = MockUserRepo::new();
    users
        .expect_id_exists()
        .withf(move |id| *id == user_id)
        .returning(|_| Ok(false));
    users
}

// =============================================================================
// Values
// =============================================================================

pub fn feet(count: f64) -> Length {
    Length::new(count, LengthUnit::Ft).expect("valid length")
}

pub fn gold(count: i64) -> Coins {
    Coins::new(count, PieceType::Gold).expect("valid coins")
}

pub fn pounds(count: f64) -> Weight {
    Weight::new(count, WeightUnit::Lb).expect("valid weight")
}

// =============================================================================
// Entities
// =============================================================================

/// Plate armor: heavy, AC 18, Strength 15, stealth disadvantage.
pub fn plate(material_id: MaterialId) -> Armor {
    Armor::new(
        ArmorId::new(),
        ArmorType::HeavyArmor,
        "Plate",
        "Interlocking metal plates",
        ArmorClass::flat(18).expect("valid armor class"),
        15,
        true,
        pounds(65.0),
        gold(1500),
        material_id,
    )
    .expect("valid armor")
}

/// A versatile martial melee weapon with no range.
pub fn longsword(material_id: MaterialId) -> Weapon {
    Weapon::new(
        WeaponId::new(),
        "Longsword",
        "A straight double-edged blade",
        WeaponType::MartialMelee,
        WeaponDamage::new(
            Dice::new(1, DiceType::D8).expect("valid dice"),
            DamageType::Slashing,
            0,
        ),
        None,
        vec![WeaponProperty::Versatile],
        pounds(3.0),
        gold(15),
        material_id,
    )
    .expect("valid weapon")
}

pub fn fighter(source_id: SourceId) -> CharacterClass {
    CharacterClass::new(
        CharacterClassId::new(),
        "Fighter",
        "A master of martial combat",
        vec![Modifier::Strength, Modifier::Dexterity],
        vec![Modifier::Strength, Modifier::Constitution],
        Dice::new(1, DiceType::D10).expect("valid dice"),
        source_id,
    )
    .expect("valid class")
}

pub fn dwarf(source_id: SourceId) -> Race {
    Race::new(
        RaceId::new(),
        "Dwarf",
        "Bold and hardy",
        CreatureTypeId::new(),
        CreatureSizeId::new(),
        feet(25.0),
        vec![ModifierBonus::new(Modifier::Constitution, 2).expect("valid bonus")],
        source_id,
    )
    .expect("valid race")
}

/// Third-level evocation for a single, unnamed class.
pub fn fireball(source_id: SourceId) -> Spell {
    Spell::new(
        SpellId::new(),
        "Fireball",
        "A bright streak blossoms into an explosion of flame",
        Some("Damage increases by 1d6 for each slot level above 3rd".to_string()),
        3,
        SpellSchool::Evocation,
        vec![CharacterClassId::new()],
        vec![],
        CastingTime::action(),
        None,
        feet(150.0),
        SpellComponents::new(true, true, true, vec![]).expect("valid components"),
        vec![Modifier::Dexterity],
        vec![DamageType::Fire],
        false,
        false,
        source_id,
    )
    .expect("valid spell")
}
