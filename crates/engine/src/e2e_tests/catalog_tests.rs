//! Equipment and material flows through the full app.

use compendium_domain::{
    ArmorClass, ArmorType, Coins, Material, MaterialId, Modifier, PieceType, UserId, Weight,
    WeightUnit,
};

use super::E2ETestContext;
use crate::infrastructure::ports::{ArmorFilter, NameFilter};
use crate::use_cases::{
    ArmorChanges, CreateArmorCommand, CreateMaterialCommand, DeleteCommand, MaterialChanges,
    UpdateArmorCommand, UpdateMaterialCommand,
};

fn plate_command(user_id: UserId, material_id: MaterialId) -> CreateArmorCommand {
    CreateArmorCommand {
        user_id,
        armor_type: ArmorType::HeavyArmor,
        name: "Plate".to_string(),
        description: "Interlocking metal plates".to_string(),
        armor_class: ArmorClass::flat(18).expect("valid armor class"),
        strength: 15,
        stealth_disadvantage: true,
        weight: Weight::new(65.0, WeightUnit::Lb).expect("valid weight"),
        cost: Coins::new(1500, PieceType::Gold).expect("valid coins"),
        material_id,
    }
}

fn strength_change(strength: u8) -> ArmorChanges {
    ArmorChanges {
        strength: Some(strength),
        ..Default::default()
    }
}

#[tokio::test]
async fn plate_armor_lifecycle() {
    let ctx = E2ETestContext::setup().await;
    let armors = &ctx.app.use_cases.armors;

    let id = armors
        .create(plate_command(ctx.admin, ctx.steel))
        .await
        .expect("plate should be created");

    let plate = armors.get(id).await.expect("plate should exist");
    assert_eq!(plate.armor_type(), ArmorType::HeavyArmor);
    assert_eq!(plate.strength(), 15);
    assert_eq!(plate.armor_class().base_class(), 18);
    assert_eq!(plate.cost().in_gold(), 1500.0);

    let same = UpdateArmorCommand::new(ctx.admin, id, strength_change(15)).expect("command");
    let err = armors.update(same).await.expect_err("same strength");
    assert!(err.is_idempotent(), "got {err:?}");

    let too_strong = UpdateArmorCommand::new(ctx.admin, id, strength_change(21)).expect("command");
    let err = armors.update(too_strong).await.expect_err("out of range");
    assert!(err.is_invalid_data(), "got {err:?}");

    let lighter = ArmorChanges {
        strength: Some(13),
        armor_class: Some(ArmorClass::new(14, Some(Modifier::Dexterity), Some(2)).expect("valid")),
        ..Default::default()
    };
    armors
        .update(UpdateArmorCommand::new(ctx.admin, id, lighter).expect("command"))
        .await
        .expect("update should succeed");

    let stored = armors.get(id).await.expect("plate should exist");
    assert_eq!(stored.strength(), 13);
    assert_eq!(stored.armor_class().modifier(), Some(Modifier::Dexterity));

    armors
        .delete(DeleteCommand::new(ctx.admin, id))
        .await
        .expect("delete should succeed");
    let err = armors.get(id).await.expect_err("deleted");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn failed_update_leaves_stored_armor_untouched() {
    let ctx = E2ETestContext::setup().await;
    let armors = &ctx.app.use_cases.armors;
    let id = armors
        .create(plate_command(ctx.admin, ctx.steel))
        .await
        .expect("plate should be created");

    // The name change is valid but the strength is not.
    let changes = ArmorChanges {
        name: Some("Half plate".to_string()),
        strength: Some(25),
        ..Default::default()
    };
    let err = armors
        .update(UpdateArmorCommand::new(ctx.admin, id, changes).expect("command"))
        .await
        .expect_err("invalid strength");
    assert!(err.is_invalid_data());

    let stored = armors.get(id).await.expect("plate should exist");
    assert_eq!(stored.name().as_str(), "Plate");
    assert_eq!(stored.strength(), 15);
}

#[tokio::test]
async fn material_in_use_cannot_be_deleted() {
    let ctx = E2ETestContext::setup().await;
    let armor_id = ctx
        .app
        .use_cases
        .armors
        .create(plate_command(ctx.admin, ctx.steel))
        .await
        .expect("plate should be created");

    let err = ctx
        .app
        .use_cases
        .materials
        .delete(DeleteCommand::new(ctx.admin, ctx.steel))
        .await
        .expect_err("material is referenced");
    assert!(err.is_invalid_data(), "got {err:?}");

    ctx.app
        .use_cases
        .armors
        .delete(DeleteCommand::new(ctx.admin, armor_id))
        .await
        .expect("armor delete should succeed");
    ctx.app
        .use_cases
        .materials
        .delete(DeleteCommand::new(ctx.admin, ctx.steel))
        .await
        .expect("unreferenced material should be deletable");
}

#[tokio::test]
async fn armor_needs_an_existing_material() {
    let ctx = E2ETestContext::setup().await;
    let err = ctx
        .app
        .use_cases
        .armors
        .create(plate_command(ctx.admin, MaterialId::new()))
        .await
        .expect_err("unknown material");
    assert!(err.is_invalid_data());
    assert!(ctx
        .app
        .use_cases
        .armors
        .list(ArmorFilter::default())
        .await
        .expect("list")
        .is_empty());
}

#[tokio::test]
async fn duplicate_names_are_rejected_at_both_layers() {
    let ctx = E2ETestContext::setup().await;

    let err = ctx
        .app
        .use_cases
        .materials
        .create(CreateMaterialCommand {
            user_id: ctx.admin,
            name: "  Steel ".to_string(),
            description: "Again".to_string(),
        })
        .await
        .expect_err("name taken");
    assert!(err.is_invalid_data(), "got {err:?}");

    let stored = ctx.app.use_cases.materials.get(ctx.steel).await.expect("exists");
    let twin = Material::new(MaterialId::new(), stored.name().as_str(), "Bypassing the use case")
        .expect("valid material");
    let err = ctx
        .app
        .repositories
        .materials
        .create(&twin)
        .await
        .expect_err("adapter enforces uniqueness");
    assert!(err.is_constraint_violation());
}

#[tokio::test]
async fn renaming_to_the_current_name_is_idempotent() {
    let ctx = E2ETestContext::setup().await;
    let changes = MaterialChanges {
        name: Some("Steel".to_string()),
        ..Default::default()
    };
    let err = ctx
        .app
        .use_cases
        .materials
        .update(UpdateMaterialCommand::new(ctx.admin, ctx.steel, changes).expect("command"))
        .await
        .expect_err("same name");
    assert!(err.is_idempotent());
}

#[tokio::test]
async fn unknown_actor_is_refused() {
    let ctx = E2ETestContext::setup().await;
    let stranger = UserId::new();

    let err = ctx
        .app
        .use_cases
        .armors
        .create(plate_command(stranger, ctx.steel))
        .await
        .expect_err("unknown actor");
    assert!(err.is_access());

    let err = ctx
        .app
        .use_cases
        .materials
        .delete(DeleteCommand::new(stranger, ctx.steel))
        .await
        .expect_err("unknown actor");
    assert!(err.is_access());
    assert_eq!(
        ctx.app
            .use_cases
            .materials
            .list(NameFilter::default())
            .await
            .expect("list")
            .len(),
        1
    );
}

#[tokio::test]
async fn get_of_unknown_id_is_not_found() {
    let ctx = E2ETestContext::setup().await;
    let err = ctx
        .app
        .use_cases
        .materials
        .get(MaterialId::new())
        .await
        .expect_err("unknown id");
    assert!(err.is_not_found());
}
