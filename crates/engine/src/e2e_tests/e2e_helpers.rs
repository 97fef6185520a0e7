//! Shared setup for end-to-end tests.

use compendium_domain::{MaterialId, SourceId, UserId};

use crate::use_cases::{CreateMaterialCommand, CreateSourceCommand, CreateUserCommand};
use crate::{App, Repositories};

/// An app with one admin, one source and one material already created.
pub struct E2ETestContext {
    pub app: App,
    pub admin: UserId,
    pub source: SourceId,
    pub steel: MaterialId,
}

impl E2ETestContext {
    pub async fn setup() -> Self {
        let app = App::new(Repositories::in_memory());

        let admin = app
            .use_cases
            .users
            .create(CreateUserCommand {
                name: "admin".to_string(),
            })
            .await
            .expect("admin should be created");
        let source = app
            .use_cases
            .sources
            .create(CreateSourceCommand {
                user_id: admin,
                name: "Player's Handbook".to_string(),
                description: "Core rules".to_string(),
            })
            .await
            .expect("source should be created");
        let steel = app
            .use_cases
            .materials
            .create(CreateMaterialCommand {
                user_id: admin,
                name: "Steel".to_string(),
                description: "Worked iron".to_string(),
            })
            .await
            .expect("material should be created");

        Self {
            app,
            admin,
            source,
            steel,
        }
    }
}
