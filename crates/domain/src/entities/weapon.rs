//! Weapon entity.

use crate::common::{ensure_unique, replace, replace_set};
use crate::error::DomainError;
use crate::ids::{MaterialId, WeaponId};
use crate::types::{WeaponProperty, WeaponType};
use crate::value_objects::{Coins, Description, Name, WeaponDamage, WeaponRange, Weight};

/// A weapon.
///
/// # Invariants
///
/// - `properties` holds no duplicates
/// - `range` is present for ranged weapon types and for the `AMMUNITION` or
///   `THROWN` properties
///
/// Changing `weapon_type`, `properties` or `range` re-checks the range rule
/// against the other two fields, so a melee weapon cannot be switched to
/// ranged without first getting a range.
#[derive(Debug, Clone)]
pub struct Weapon {
    id: WeaponId,
    name: Name,
    description: Description,
    weapon_type: WeaponType,
    damage: WeaponDamage,
    range: Option<WeaponRange>,
    properties: Vec<WeaponProperty>,
    weight: Weight,
    cost: Coins,
    material_id: MaterialId,
}

impl Weapon {
    pub fn new(
        id: WeaponId,
        name: impl Into<String>,
        description: impl Into<String>,
        weapon_type: WeaponType,
        damage: WeaponDamage,
        range: Option<WeaponRange>,
        properties: Vec<WeaponProperty>,
        weight: Weight,
        cost: Coins,
        material_id: MaterialId,
    ) -> Result<Self, DomainError> {
        ensure_unique(&properties, "Properties")?;
        validate_range(weapon_type, &properties, range.as_ref())?;
        Ok(Self {
            id,
            name: Name::new(name)?,
            description: Description::new(description)?,
            weapon_type,
            damage,
            range,
            properties,
            weight,
            cost,
            material_id,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> WeaponId {
        self.id
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
    pub fn weapon_type(&self) -> WeaponType {
        self.weapon_type
    }

    #[inline]
    pub fn damage(&self) -> WeaponDamage {
        self.damage
    }

    #[inline]
    pub fn range(&self) -> Option<WeaponRange> {
        self.range
    }

    #[inline]
    pub fn properties(&self) -> &[WeaponProperty] {
        &self.properties
    }

    pub fn has_property(&self, property: WeaponProperty) -> bool {
        self.properties.contains(&property)
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

    pub fn new_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.name, Name::new(name)?, "Name")
    }

    pub fn new_description(&mut self, description: impl Into<String>) -> Result<(), DomainError> {
        replace(&mut self.description, Description::new(description)?, "Description")
    }

    pub fn new_weapon_type(&mut self, weapon_type: WeaponType) -> Result<(), DomainError> {
        validate_range(weapon_type, &self.properties, self.range.as_ref())?;
        replace(&mut self.weapon_type, weapon_type, "Weapon type")
    }

    pub fn new_damage(&mut self, damage: WeaponDamage) -> Result<(), DomainError> {
        replace(&mut self.damage, damage, "Damage")
    }

    pub fn new_range(&mut self, range: Option<WeaponRange>) -> Result<(), DomainError> {
        validate_range(self.weapon_type, &self.properties, range.as_ref())?;
        replace(&mut self.range, range, "Range")
    }

    pub fn new_properties(&mut self, properties: Vec<WeaponProperty>) -> Result<(), DomainError> {
        ensure_unique(&properties, "Properties")?;
        validate_range(self.weapon_type, &properties, self.range.as_ref())?;
        replace_set(&mut self.properties, properties, "Properties")
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

impl_identity!(Weapon, WeaponId);

fn validate_range(
    weapon_type: WeaponType,
    properties: &[WeaponProperty],
    range: Option<&WeaponRange>,
) -> Result<(), DomainError> {
    let needs_range =
        weapon_type.is_ranged() || properties.iter().any(|property| property.requires_range());
    if needs_range && range.is_none() {
        return Err(DomainError::invalid_data(format!(
            "A {} with properties [{}] requires a range",
            weapon_type.display_name(),
            properties
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }
    Ok(())
}
