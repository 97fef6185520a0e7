//! Seeded reference data feeding regular use cases.

use std::io::Write;

use compendium_domain::{Length, LengthUnit, Modifier, ModifierBonus};

use super::E2ETestContext;
use crate::infrastructure::ports::NameFilter;
use crate::use_cases::{CreateRaceCommand, DeleteCommand};

const SEED: &str = r#"{
  "creatureTypes": [{ "name": "Humanoid", "description": "People of the world" }],
  "creatureSizes": [
    { "name": "Medium", "description": "Human-sized", "space": { "count": 5, "unit": "FT" } }
  ]
}"#;

#[tokio::test]
async fn seeded_creature_data_backs_a_race() {
    let ctx = E2ETestContext::setup().await;
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SEED.as_bytes()).expect("write seed");

    let summary = ctx
        .app
        .use_cases
        .seed
        .import_file(ctx.admin, file.path())
        .await
        .expect("seed should import");
    assert_eq!(summary.total(), 2);

    let humanoid = ctx
        .app
        .use_cases
        .creature_types
        .list(NameFilter::by_name("humanoid"))
        .await
        .expect("list")
        .pop()
        .expect("humanoid was seeded");
    let medium = ctx
        .app
        .use_cases
        .creature_sizes
        .list(NameFilter::by_name("Medium"))
        .await
        .expect("list")
        .pop()
        .expect("medium was seeded");

    ctx.app
        .use_cases
        .races
        .create(CreateRaceCommand {
            user_id: ctx.admin,
            name: "Dwarf".to_string(),
            description: "Bold and hardy".to_string(),
            creature_type_id: humanoid.id(),
            creature_size_id: medium.id(),
            speed: Length::new(25.0, LengthUnit::Ft).expect("valid length"),
            increase_modifiers: vec![
                ModifierBonus::new(Modifier::Constitution, 2).expect("valid bonus")
            ],
            source_id: ctx.source,
        })
        .await
        .expect("race should be created");

    let err = ctx
        .app
        .use_cases
        .creature_types
        .delete(DeleteCommand::new(ctx.admin, humanoid.id()))
        .await
        .expect_err("a race uses the type");
    assert!(err.is_invalid_data(), "got {err:?}");
}

#[tokio::test]
async fn reimporting_the_same_seed_fails_on_the_first_duplicate() {
    let ctx = E2ETestContext::setup().await;
    let seed = &ctx.app.use_cases.seed;

    seed.import_str(ctx.admin, SEED).await.expect("first import");
    let err = seed
        .import_str(ctx.admin, SEED)
        .await
        .expect_err("names are taken");
    assert!(err.to_string().contains("Humanoid"), "got {err}");
}
