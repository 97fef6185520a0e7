//! Armor entity - wearable protection and shields.

use crate::common::{ensure_range, replace};
use crate::error::DomainError;
use crate::ids::{ArmorId, MaterialId};
use crate::types::ArmorType;
use crate::value_objects::{ArmorClass, Coins, Description, Name, Weight};

/// Minimum and maximum Strength score an armor can demand.
const STRENGTH_RANGE: (u8, u8) = (0, 20);

/// A piece of armor.
///
/// # Invariants
///
/// - `name` is non-empty and <= 50 characters (enforced by `Name`)
/// - `description` is non-empty (enforced by `Description`)
/// - `strength` is in `0..=20`; 0 means no Strength requirement
/// - `armor_class` is valid by construction (see [`ArmorClass`])
///
/// # Example
///
/// ```
/// use compendium_domain::{Armor, ArmorClass, ArmorId, ArmorType, Coins, MaterialId, PieceType, Weight, WeightUnit};
///
/// let armor = Armor::new(
///     ArmorId::new(),
///     ArmorType::HeavyArmor,
///     "Plate",
///     "Interlocking steel plates",
///     ArmorClass::flat(18).unwrap(),
///     15,
///     true,
///     Weight::new(65.0, WeightUnit::Lb).unwrap(),
///     Coins::new(1500, PieceType::Gold).unwrap(),
///     MaterialId::new(),
/// )
/// .unwrap();
///
/// assert_eq!(armor.strength(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct Armor {
    id: ArmorId,
    armor_type: ArmorType,
    name: Name,
    description: Description,
    armor_class: ArmorClass,
    strength: u8,
    stealth_disadvantage: bool,
    weight: Weight,
    cost: Coins,
    material_id: MaterialId,
}

impl Armor {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new(
        id: ArmorId,
        armor_type: ArmorType,
        name: impl Into<String>,
        description: impl Into<String>,
        armor_class: ArmorClass,
        strength: u8,
        stealth_disadvantage: bool,
        weight: Weight,
        cost: Coins,
        material_id: MaterialId,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            armor_type,
            name: Name::new(name)?,
            description: Description::new(description)?,
            armor_class,
            strength: validate_strength(strength)?,
            stealth_disadvantage,
            weight,
            cost,
            material_id,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> ArmorId {
        self.id
    }

    #[inline]
    pub fn armor_type(&self) -> ArmorType {
        self.armor_type
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &Description {
        &self.description
    }

    #[inline]
    pub fn armor_class(&self) -> ArmorClass {
        self.armor_class
    }

    /// Strength score needed to wear the armor without a speed penalty.
    #[inline]
    pub fn strength(&self) -> u8 {
        self.strength
    }

    /// Whether the wearer has disadvantage on Stealth checks.
    #[inline]
    pub fn stealth_disadvantage(&self) -> bool {
        self.stealth_disadvantage
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[inline]
    pub fn cost(&self) -> Coins {
        self.cost
    }

    #[inline]
    pub fn material_id(&self) -> MaterialId {
        self.material_id
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    pub fn new_armor_type(&mut self, armor_type: ArmorType) -> Result<(), DomainError> {
        replace(&mut self.armor_type, armor_type, "Armor type")
    }

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }

    pub fn new_armor_class(&mut self, armor_class: ArmorClass) -> Result<(), DomainError> {
        replace(&mut self.armor_class, armor_class, "Armor class")
    }

    pub fn new_strength(&mut self, strength: u8) -> Result<(), DomainError> {
        replace(&mut self.strength, validate_strength(strength)?, "Strength")
    }

    pub fn new_stealth_disadvantage(&mut self, stealth: bool) -> Result<(), DomainError> {
        replace(&mut self.stealth_disadvantage, stealth, "Stealth disadvantage")
    }

    pub fn new_weight(&mut self, weight: Weight) -> Result<(), DomainError> {
        replace(&mut self.weight, weight, "Weight")
    }

    pub fn new_cost(&mut self, cost: Coins) -> Result<(), DomainError> {
        replace(&mut self.cost, cost, "Cost")
    }

    pub fn new_material_id(&mut self, material_id: MaterialId) -> Result<(), DomainError> {
        replace(&mut self.material_id, material_id, "Material")
    }
}

impl_identity!(Armor, ArmorId);

fn validate_strength(strength: u8) -> Result<u8, DomainError> {
    ensure_range(strength, STRENGTH_RANGE.0, STRENGTH_RANGE.1, "Strength")?;
    Ok(strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Modifier, PieceType, WeightUnit};

    fn armor_with_strength(strength: u8) -> Result<Armor, DomainError> {
        Armor::new(
            ArmorId::new(),
            ArmorType::HeavyArmor,
            "Plate",
            "Interlocking metal plates",
            ArmorClass::flat(18).expect("valid armor class"),
            strength,
            true,
            Weight::new(65.0, WeightUnit::Lb).expect("valid weight"),
            Coins::new(1500, PieceType::Gold).expect("valid coins"),
            MaterialId::new(),
        )
    }

    #[test]
    fn strength_boundaries() {
        assert!(armor_with_strength(0).is_ok());
        assert!(armor_with_strength(20).is_ok());
        assert!(armor_with_strength(21)
            .expect_err("out of range")
            .is_invalid_data());
    }

    #[test]
    fn empty_name_is_invalid() {
        let err = Armor::new(
            ArmorId::new(),
            ArmorType::Shield,
            " ",
            "Wooden shield",
            ArmorClass::flat(2).expect("valid armor class"),
            0,
            false,
            Weight::new(6.0, WeightUnit::Lb).expect("valid weight"),
            Coins::new(10, PieceType::Gold).expect("valid coins"),
            MaterialId::new(),
        )
        .expect_err("empty name");
        assert!(err.is_invalid_data());
    }

    #[test]
    fn new_strength_rejects_same_value() {
        let mut armor = armor_with_strength(15).expect("valid armor");
        assert!(armor.new_strength(15).expect_err("same").is_idempotent());
    }

    #[test]
    fn new_strength_validates_before_idempotency() {
        let mut armor = armor_with_strength(15).expect("valid armor");
        assert!(armor.new_strength(21).expect_err("range").is_invalid_data());
        assert_eq!(armor.strength(), 15);
    }

    #[test]
    fn new_strength_applies_change() {
        let mut armor = armor_with_strength(15).expect("valid armor");
        armor.new_strength(13).expect("changed");
        assert_eq!(armor.strength(), 13);
    }

    #[test]
    fn new_name_trims_before_comparing() {
        let mut armor = armor_with_strength(15).expect("valid armor");
        assert!(armor.new_name(" Plate ").expect_err("same").is_idempotent());
        armor.new_name("Half plate").expect("changed");
        assert_eq!(armor.name().as_str(), "Half plate");
    }

    #[test]
    fn new_armor_class_and_material() {
        let mut armor = armor_with_strength(0).expect("valid armor");
        let ac = ArmorClass::new(14, Some(Modifier::Dexterity), Some(2)).expect("valid");
        armor.new_armor_class(ac).expect("changed");
        assert_eq!(armor.armor_class(), ac);
        assert!(armor.new_armor_class(ac).is_err());

        let material = MaterialId::new();
        armor.new_material_id(material).expect("changed");
        assert_eq!(armor.material_id(), material);
    }

    #[test]
    fn equality_is_by_identity() {
        let armor = armor_with_strength(15).expect("valid armor");
        let mut renamed = armor.clone();
        renamed.new_name("Renamed").expect("changed");
        assert_eq!(armor, renamed);
        assert_eq!(armor, armor.id());
        assert_eq!(armor, *armor.id().as_uuid());
        assert_ne!(armor, armor_with_strength(15).expect("valid armor"));
    }
}
