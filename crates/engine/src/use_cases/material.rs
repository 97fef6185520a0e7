//! Material and material component use cases.

use std::sync::Arc;

use compendium_domain::{Coins, Material, MaterialComponent, MaterialComponentId, MaterialId, UserId};

use crate::infrastructure::ports::{
    ArmorFilter, ArmorRepo, MaterialComponentFilter, MaterialComponentRepo, MaterialRepo,
    NameFilter, SpellFilter, SpellRepo, UserRepo, WeaponFilter, WeaponRepo,
};
use crate::services::{MaterialComponentService, MaterialService};

use super::command::{impl_changes, DeleteCommand, UpdateCommand};
use super::error::UseCaseError;
use super::validation::{
    authorize, is_rename, require_available, require_found, require_unreferenced,
};

// =============================================================================
// Material
// =============================================================================

const MATERIAL: &str = "Material";

#[derive(Debug, Clone)]
pub struct CreateMaterialCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct MaterialChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl_changes!(MaterialChanges { name, description });

pub type UpdateMaterialCommand = UpdateCommand<MaterialId, MaterialChanges>;

/// Material CRUD. Armors and weapons reference materials, so a material in
/// use can't be deleted.
pub struct MaterialCrud {
    users: Arc<dyn UserRepo>,
    materials: Arc<dyn MaterialRepo>,
    armors: Arc<dyn ArmorRepo>,
    weapons: Arc<dyn WeaponRepo>,
    service: Arc<MaterialService>,
}

impl MaterialCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        materials: Arc<dyn MaterialRepo>,
        armors: Arc<dyn ArmorRepo>,
        weapons: Arc<dyn WeaponRepo>,
        service: Arc<MaterialService>,
    ) -> Self {
        Self {
            users,
            materials,
            armors,
            weapons,
            service,
        }
    }

    pub async fn create(&self, command: CreateMaterialCommand) -> Result<MaterialId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_available(
            self.service.can_create_with_name(&command.name).await?,
            MATERIAL,
            command.name.trim(),
        )?;

        let material = Material::new(
            self.materials.next_id().await?,
            command.name,
            command.description,
        )?;
        self.materials.create(&material).await?;

        tracing::info!(material_id = %material.id(), name = %material.name(), "Material created");
        Ok(material.id())
    }

    pub async fn update(&self, command: UpdateMaterialCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut material = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(material.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    MATERIAL,
                    name.trim(),
                )?;
            }
            material.new_name(name)?;
        }
        if let Some(description) = changes.description {
            material.new_description(description)?;
        }

        self.materials.update(&material).await?;
        tracing::info!(material_id = %material.id(), "Material updated");
        Ok(())
    }

    pub async fn delete(&self, command: DeleteCommand<MaterialId>) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        let id = command.id;
        require_found(self.materials.id_exists(id).await?, MATERIAL, id)?;

        let armors = ArmorFilter {
            material_ids: Some(vec![id]),
            ..Default::default()
        };
        require_unreferenced(self.armors.filter(&armors).await?.len(), MATERIAL, id, "armors")?;
        let weapons = WeaponFilter {
            material_ids: Some(vec![id]),
            ..Default::default()
        };
        require_unreferenced(self.weapons.filter(&weapons).await?.len(), MATERIAL, id, "weapons")?;

        self.materials.delete(id).await?;
        tracing::info!(material_id = %id, "Material deleted");
        Ok(())
    }

    pub async fn get(&self, id: MaterialId) -> Result<Material, UseCaseError> {
        self.materials
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(MATERIAL, id))
    }

    pub async fn list(&self, filter: NameFilter) -> Result<Vec<Material>, UseCaseError> {
        Ok(self.materials.filter(&filter).await?)
    }
}

// =============================================================================
// Material Component
// =============================================================================

const COMPONENT: &str = "MaterialComponent";

#[derive(Debug, Clone)]
pub struct CreateMaterialComponentCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub cost: Option<Coins>,
    pub consumed: bool,
}

/// `cost: Some(None)` clears the price.
#[derive(Debug, Clone, Default)]
pub struct MaterialComponentChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<Option<Coins>>,
    pub consumed: Option<bool>,
}

impl_changes!(MaterialComponentChanges { name, description, cost, consumed });

pub type UpdateMaterialComponentCommand =
    UpdateCommand<MaterialComponentId, MaterialComponentChanges>;

/// Material component CRUD. Spells list their components, so a component a
/// spell still lists can't be deleted.
pub struct MaterialComponentCrud {
    users: Arc<dyn UserRepo>,
    components: Arc<dyn MaterialComponentRepo>,
    spells: Arc<dyn SpellRepo>,
    service: Arc<MaterialComponentService>,
}

impl MaterialComponentCrud {
    pub fn new(
        users: Arc<dyn UserRepo>,
        components: Arc<dyn MaterialComponentRepo>,
        spells: Arc<dyn SpellRepo>,
        service: Arc<MaterialComponentService>,
    ) -> Self {
        Self {
            users,
            components,
            spells,
            service,
        }
    }

    pub async fn create(
        &self,
        command: CreateMaterialComponentCommand,
    ) -> Result<MaterialComponentId, UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        require_available(
            self.service.can_create_with_name(&command.name).await?,
            COMPONENT,
            command.name.trim(),
        )?;

        let component = MaterialComponent::new(
            self.components.next_id().await?,
            command.name,
            command.description,
            command.cost,
            command.consumed,
        )?;
        self.components.create(&component).await?;

        tracing::info!(
            component_id = %component.id(),
            name = %component.name(),
            "Material component created"
        );
        Ok(component.id())
    }

    pub async fn update(&self, command: UpdateMaterialComponentCommand) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id()).await?;
        let mut component = self.get(command.id()).await?;
        let changes = command.into_changes();

        if let Some(name) = changes.name {
            if is_rename(component.name(), &name) {
                require_available(
                    self.service.can_rename_with_name(&name).await?,
                    COMPONENT,
                    name.trim(),
                )?;
            }
            component.new_name(name)?;
        }
        if let Some(description) = changes.description {
            component.new_description(description)?;
        }
        if let Some(cost) = changes.cost {
            component.new_cost(cost)?;
        }
        if let Some(consumed) = changes.consumed {
            component.new_consumed(consumed)?;
        }

        self.components.update(&component).await?;
        tracing::info!(component_id = %component.id(), "Material component updated");
        Ok(())
    }

    pub async fn delete(
        &self,
        command: DeleteCommand<MaterialComponentId>,
    ) -> Result<(), UseCaseError> {
        authorize(self.users.as_ref(), command.user_id).await?;
        let id = command.id;
        require_found(self.components.id_exists(id).await?, COMPONENT, id)?;

        let spells = SpellFilter {
            material_ids: Some(vec![id]),
            ..Default::default()
        };
        require_unreferenced(self.spells.filter(&spells).await?.len(), COMPONENT, id, "spells")?;

        self.components.delete(id).await?;
        tracing::info!(component_id = %id, "Material component deleted");
        Ok(())
    }

    pub async fn get(&self, id: MaterialComponentId) -> Result<MaterialComponent, UseCaseError> {
        self.components
            .get(id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(COMPONENT, id))
    }

    pub async fn list(
        &self,
        filter: MaterialComponentFilter,
    ) -> Result<Vec<MaterialComponent>, UseCaseError> {
        Ok(self.components.filter(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockArmorRepo, MockMaterialComponentRepo, MockMaterialRepo, MockSpellRepo, MockWeaponRepo,
    };
    use crate::test_fixtures::{known_user, plate};

    fn material_crud(
        user_id: UserId,
        materials: MockMaterialRepo,
        armors: MockArmorRepo,
        weapons: MockWeaponRepo,
    ) -> MaterialCrud {
        let materials: Arc<dyn MaterialRepo> = Arc::new(materials);
        MaterialCrud::new(
            Arc::new(known_user(user_id)),
            materials.clone(),
            Arc::new(armors),
            Arc::new(weapons),
            Arc::new(MaterialService::new(materials)),
        )
    }

    #[tokio::test]
    async fn material_used_by_armor_cannot_be_deleted() {
        let user_id = UserId::new();
        let steel = MaterialId::new();

        let mut materials = MockMaterialRepo::new();
        materials.expect_id_exists().returning(|_| Ok(true));
        materials.expect_delete().times(0);
        let mut armors = MockArmorRepo::new();
        armors
            .expect_filter()
            .withf(move |filter| filter.material_ids == Some(vec![steel]))
            .returning(move |_| Ok(vec![plate(steel)]));

        let error = material_crud(user_id, materials, armors, MockWeaponRepo::new())
            .delete(DeleteCommand::new(user_id, steel))
            .await
            .expect_err("in use");
        assert!(error.is_invalid_data());
        assert!(error.to_string().contains("armors"));
    }

    #[tokio::test]
    async fn deleting_missing_material_is_not_found() {
        let user_id = UserId::new();
        let mut materials = MockMaterialRepo::new();
        materials.expect_id_exists().returning(|_| Ok(false));

        let error = material_crud(user_id, materials, MockArmorRepo::new(), MockWeaponRepo::new())
            .delete(DeleteCommand::new(user_id, MaterialId::new()))
            .await
            .expect_err("missing");
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn component_cost_can_be_cleared() {
        let user_id = UserId::new();
        let id = MaterialComponentId::new();
        let diamond = MaterialComponent::new(
            id,
            "Diamond",
            "A diamond worth at least 300 gp",
            Some(Coins::new(300, compendium_domain::PieceType::Gold).expect("valid coins")),
            true,
        )
        .expect("valid component");

        let mut components = MockMaterialComponentRepo::new();
        components
            .expect_get()
            .returning(move |_| Ok(Some(diamond.clone())));
        components
            .expect_update()
            .withf(|component| component.cost().is_none())
            .times(1)
            .returning(|_| Ok(()));
        let components: Arc<dyn MaterialComponentRepo> = Arc::new(components);
        let crud = MaterialComponentCrud::new(
            Arc::new(known_user(user_id)),
            components.clone(),
            Arc::new(MockSpellRepo::new()),
            Arc::new(MaterialComponentService::new(components)),
        );

        let command = UpdateMaterialComponentCommand::new(
            user_id,
            id,
            MaterialComponentChanges {
                cost: Some(None),
                ..Default::default()
            },
        )
        .expect("has changes");
        crud.update(command).await.expect("updated");
    }
}
