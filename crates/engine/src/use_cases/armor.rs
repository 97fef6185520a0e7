//! Armor use cases.

use std::sync::Arc;

use compendium_domain::{Armor, ArmorClass, ArmorId, ArmorType, Coins, MaterialId, UserId, Weight};

use crate::infrastructure::ports::{ArmorFilter, ArmorRepo, MaterialRepo, UserRepo};
use crate::services::ArmorService;

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{
    authorize, is_rename, require_available, require_found, require_reference,
};

const ENTITY: &str = "Armor";

#[derive(Debug, Clone)]
pub struct CreateArmorCommand {
    pub user_id: UserId,
    pub armor_type: ArmorType,
    pub name: String,
    pub description: String,
    pub armor_class: ArmorClass,
    pub strength: u8,
    pub stealth_disadvantage: bool,
    pub weight: Weight,
    pub cost: Coins,
    pub material_id: MaterialId,
}

#[derive(Debug, Clone, Default)]
pub struct ArmorChanges {
    pub armor_type: Option<ArmorType>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub armor_class: Option<ArmorClass>,
    pub strength: Option<u8>,
    pub stealth_disadvantage: Option<bool>,
    pub weight: Option<Weight>,
    pub cost: Option<Coins>,
    pub material_id: Option<MaterialId>,
}

impl_changes!(ArmorChanges {
    armor_type,
    name,
    description,
    armor_class,
    strength,
    stealth_disadvantage,
    weight,
    cost,
    material_id,
});

pub type UpdateArmorCommand = UpdateCommand<ArmorId, ArmorChanges>;

/// Armor CRUD.
///
/// Create and update check, in order: the actor, name availability, the
/// referenced material, then the armor's own invariants. Nothing is written
/// until every check passed.
pub struct ArmorCrud {
    users: Arc<dyn UserRepo>,
    armors: Arc<dyn ArmorRepo>,
    materials: Arc<dyn MaterialRepo>,
    service: Arc<ArmorService>,
}

impl ArmorCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        armors: Arc<dyn ArmorRepo>,
        materials: Arc<dyn MaterialRepo>,
        service: Arc<ArmorService>,
    ) -> Self {
        Self {
            users,
            armors,
            materials,
            service,
        }
    }

    pub async fn create(&self, command: CreateArmorCommand) -> Result<ArmorId, UseCaseError> {
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

        let armor = Armor::new(
            self.armors.next_id().await?,
            command.armor_type,
            command.name,
            command.description,
            command.armor_class,
            command.strength,
            command.stealth_disadvantage,
            command.weight,
            command.cost,
            command.material_id,
        )?;
        self.armors.create(&armor).await?;

        tracing::info!(armor_id = %armor.id(), name = %armor.name(), "Armor created");
        Ok(armor.id())
    }

    pub async fn update(&self, command: UpdateArmorCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut armor = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(armor_type) = changes.armor_type {
            armor.new_armor_type(armor_type)?;
        }
        if let Some(name) = changes.name {
            if is_rename(armor.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    ENTITY,
                    name.trim(),
                )?;
            }
            armor.new_name(name)?;
        }
        if let Some(description) = changes.description {
            armor.new_description(description)?;
        }
        if let Some(armor_class) = changes.armor_class {
            armor.new_armor_class(armor_class)?;
        }
        if let Some(strength) = changes.strength {
            armor.new_strength(strength)?;
        }
        if let Some(stealth) = changes.stealth_disadvantage {
            armor.new_stealth_disadvantage(stealth)?;
        }
        if let Some(weight) = changes.weight {
            armor.new_weight(weight)?;
        }
        if let Some(cost) = changes.cost {
            armor.new_cost(cost)?;
        }
        if let Some(material_id) = changes.material_id {
            require_reference(
                self.materials.id_exists(material_id).await?,
                "Material",
                material_id,
            )?;
            armor.new_material_id(material_id)?;
        }

        self.armors.update(&armor).await?;
        tracing::info!(armor_id = %armor.id(), "Armor updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<ArmorId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_found(self.armors.id_exists(command.id).await?, ENTITY, command.id)?;

        self.armors.delete(command.id).await?;
        tracing::info!(armor_id = %command.id, "Armor deleted");
        Ok(())
    }

    pub async fn get(&self, id: ArmorId) -> Result<Armor, UseCaseError> {
        self.armors
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(ENTITY, id))
    }

    pub async fn list(&self, filter: ArmorFilter) -> Result<Vec<Armor>, UseCaseError> {
        Ok(self.armors.filter(&filter).await?)
    }
}
