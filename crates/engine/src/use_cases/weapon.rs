//! Weapon use cases.

use std::sync::Arc;

use compendium_domain::{
    Coins, MaterialId, UserId, Weapon, WeaponDamage, WeaponId, WeaponProperty, WeaponRange,
    WeaponType, Weight,
};

use crate::infrastructure::ports::{MaterialRepo, UserRepo, WeaponFilter, WeaponRepo};
use crate::services::WeaponService;

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{
    authorize, is_rename, require_available, require_found, require_reference,
};

const ENTITY: &str = "Weapon";

#[derive(Debug, Clone)]
pub struct CreateWeaponCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub weapon_type: WeaponType,
    pub damage: WeaponDamage,
    pub range: Option<WeaponRange>,
    pub properties: Vec<WeaponProperty>,
    pub weight: Weight,
    pub cost: Coins,
    pub material_id: MaterialId,
}

/// `range: Some(None)` removes the range.
#[derive(Debug, Clone, Default)]
pub struct WeaponChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub weapon_type: Option<WeaponType>,
    pub damage: Option<WeaponDamage>,
    pub range: Option<Option<WeaponRange>>,
    pub properties: Option<Vec<WeaponProperty>>,
    pub weight: Option<Weight>,
    pub cost: Option<Coins>,
    pub material_id: Option<MaterialId>,
}

impl_changes!(WeaponChanges {
    name,
    description,
    weapon_type,
    damage,
    range,
    properties,
    weight,
    cost,
    material_id,
});

pub type UpdateWeaponCommand = UpdateCommand<WeaponId, WeaponChanges>;

pub struct WeaponCrud {
    users: Arc<dyn UserRepo>,
    weapons: Arc<dyn WeaponRepo>,
    materials: Arc<dyn MaterialRepo>,
    service: Arc<WeaponService>,
}

impl WeaponCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        weapons: Arc<dyn WeaponRepo>,
        materials: Arc<dyn MaterialRepo>,
        service: Arc<WeaponService>,
    ) -> Self {
        Self {
            users,
            weapons,
            materials,
            service,
        }
    }

    pub async fn create(&self, command: CreateWeaponCommand) -> Result<WeaponId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_available(
            self.service.can_create_with_name(&command.name).await?,
            ENTITY,
            command.name.trim(),
        )?;
        require_reference(
            self.materials.id_exists(command.material_id).await?,
            "Material",
            command.material_id,
        )?;

        let weapon = Weapon::new(
            self.weapons.next_id().await?,
            command.name,
            command.description,
            command.weapon_type,
            command.damage,
            command.range,
            command.properties,
            command.weight,
            command.cost,
            command.material_id,
        )?;
        self.weapons.create(&weapon).await?;

        tracing::info!(weapon_id = %weapon.id(), name = %weapon.name(), "Weapon created");
        Ok(weapon.id())
    }

    /// Applies the changes in field order, except that a new range lands
    /// before the type and properties and a removed range lands after them.
    /// That way a melee weapon can become ranged, and the other way round,
    /// in a single update.
    pub async fn update(&self, command: UpdateWeaponCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut weapon = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(weapon.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    ENTITY,
                    name.trim(),
                )?;
            }
            weapon.new_name(name)?;
        }
        if let Some(description) = changes.description {
            weapon.new_description(description)?;
        }

        let (range_first, range_last) = match changes.range {
            Some(Some(range)) => (Some(Some(range)), None),
            Some(None) => (None, Some(None)),
            None => (None, None),
        };
        if let Some(range) = range_first {
            weapon.new_range(range)?;
        }
        if let Some(weapon_type) = changes.weapon_type {
            weapon.new_weapon_type(weapon_type)?;
        }
        if let Some(properties) = changes.properties {
            weapon.new_properties(properties)?;
        }
        if let Some(range) = range_last {
            weapon.new_range(range)?;
        }

        if let Some(damage) = changes.damage {
            weapon.new_damage(damage)?;
        }
        if let Some(weight) = changes.weight {
            weapon.new_weight(weight)?;
        }
        if let Some(cost) = changes.cost {
            weapon.new_cost(cost)?;
        }
        if let Some(material_id) = changes.material_id {
            require_reference(
                self.materials.id_exists(material_id).await?,
                "Material",
                material_id,
            )?;
            weapon.new_material_id(material_id)?;
        }

        self.weapons.update(&weapon).await?;
        tracing::info!(weapon_id = %weapon.id(), "Weapon updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<WeaponId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_found(self.weapons.id_exists(command.id).await?, ENTITY, command.id)?;

        self.weapons.delete(command.id).await?;
        tracing::info!(weapon_id = %command.id, "Weapon deleted");
        Ok(())
    }

    pub async fn get(&self, id: WeaponId) -> Result<Weapon, UseCaseError> {
        self.weapons
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(ENTITY, id))
    }

    pub async fn list(&self, filter: WeaponFilter) -> Result<Vec<Weapon>, UseCaseError> {
        Ok(self.weapons.filter(&filter).await?)
    }
}
