//! Compendium Engine - Main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use compendium_engine::use_cases::CreateUserCommand;
use compendium_engine::{App, AppConfig, Repositories};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "compendium_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Compendium Engine");

    let config = AppConfig::from_env()?;
    let app = App::new(Repositories::in_memory());

    let admin = app
        .use_cases
        .users
        .create(CreateUserCommand {
            name: config.admin_name.clone(),
        })
        .await?;
    tracing::info!(user_id = %admin, name = %config.admin_name, "Admin user ready");

    if let Some(path) = &config.seed_path {
        tracing::info!(path = %path.display(), "Importing seed");
        let summary = app.use_cases.seed.import_file(admin, path).await?;
        tracing::info!(records = summary.total(), "Seed complete");
    }

    let sources = app.use_cases.sources.list(Default::default()).await?;
    let materials = app.use_cases.materials.list(Default::default()).await?;
    let creature_types = app.use_cases.creature_types.list(Default::default()).await?;
    tracing::info!(
        sources = sources.len(),
        materials = materials.len(),
        creature_types = creature_types.len(),
        "Compendium ready"
    );

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
