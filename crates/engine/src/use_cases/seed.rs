//! Seed importer.
//!
//! Loads reference data from a JSON document and feeds every record through
//! the regular create use cases, so a seed file can never put data into the
//! store that the use cases would reject. Records are created in document
//! order by category: users, sources, materials, material components,
//! creature types, creature sizes. The first failure stops the import;
//! records created before it stay.
//!
//! ```json
//! {
//!   "sources": [{ "name": "Player's Handbook", "description": "Core rules" }],
//!   "materialComponents": [
//!     { "name": "Diamond", "description": "Worth 300 gp",
//!       "cost": { "count": 300, "pieceType": "GOLD" }, "consumed": true }
//!   ],
//!   "creatureSizes": [
//!     { "name": "Medium", "description": "Human-sized",
//!       "space": { "count": 5, "unit": "FT" } }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use compendium_domain::{Coins, Length, LengthUnit, PieceType, UserId};

use super::creature::{
    CreateCreatureSizeCommand, CreateCreatureTypeCommand, CreatureSizeCrud, CreatureTypeCrud,
};
use super::error::UseCaseError;
use super::material::{
    CreateMaterialCommand, CreateMaterialComponentCommand, MaterialComponentCrud, MaterialCrud,
};
use super::source::{CreateSourceCommand, SourceCrud};
use super::user::{CreateUserCommand, UserCrud};

// =============================================================================
// Document
// =============================================================================

/// A seed document. Every category is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedDocument {
    pub users: Vec<UserSeed>,
    pub sources: Vec<NamedSeed>,
    pub materials: Vec<NamedSeed>,
    pub material_components: Vec<MaterialComponentSeed>,
    pub creature_types: Vec<NamedSeed>,
    pub creature_sizes: Vec<CreatureSizeSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSeed {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedSeed {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinsSeed {
    pub count: i64,
    pub piece_type: PieceType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LengthSeed {
    pub count: f64,
    pub unit: LengthUnit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaterialComponentSeed {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub cost: Option<CoinsSeed>,
    #[serde(default)]
    pub consumed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatureSizeSeed {
    pub name: String,
    pub description: String,
    pub space: LengthSeed,
}

// =============================================================================
// Errors and summary
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to seed {category} '{name}': {source}")]
    Record {
        category: &'static str,
        name: String,
        #[source]
        source: UseCaseError,
    },
}

/// Number of records created per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub sources: usize,
    pub materials: usize,
    pub material_components: usize,
    pub creature_types: usize,
    pub creature_sizes: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.users
            + self.sources
            + self.materials
            + self.material_components
            + self.creature_types
            + self.creature_sizes
    }
}

// =============================================================================
// Importer
// =============================================================================

pub struct SeedImporter {
    users: Arc<UserCrud>,
    sources: Arc<SourceCrud>,
    materials: Arc<MaterialCrud>,
    components: Arc<MaterialComponentCrud>,
    creature_types: Arc<CreatureTypeCrud>,
    creature_sizes: Arc<CreatureSizeCrud>,
}

impl SeedImporter {
    pub fn new(
        users: Arc<UserCrud>,
        sources: Arc<SourceCrud>,
        materials: Arc<MaterialCrud>,
        components: Arc<MaterialComponentCrud>,
        creature_types: Arc<CreatureTypeCrud>,
        creature_sizes: Arc<CreatureSizeCrud>,
    ) -> Self {
        Self {
            users,
            sources,
            materials,
            components,
            creature_types,
            creature_sizes,
        }
    }

    /// Reads and imports the document at `path` on behalf of `actor`.
    pub async fn import_file(
        &self,
        actor: UserId,
        path: impl AsRef<Path>,
    ) -> Result<SeedSummary, SeedError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "Read seed file");
        self.import_str(actor, &content).await
    }

    pub async fn import_str(&self, actor: UserId, content: &str) -> Result<SeedSummary, SeedError> {
        let document: SeedDocument = serde_json::from_str(content)?;
        self.import(actor, document).await
    }

    pub async fn import(
        &self,
        actor: UserId,
        document: SeedDocument,
    ) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();

        for seed in document.users {
            let command = CreateUserCommand {
                name: seed.name.clone(),
            };
            record("user", &seed.name, self.users.create(command).await)?;
            summary.users += 1;
        }

        for seed in document.sources {
            let command = CreateSourceCommand {
                user_id: actor,
                name: seed.name.clone(),
                description: seed.description,
            };
            record("source", &seed.name, self.sources.create(command).await)?;
            summary.sources += 1;
        }

        for seed in document.materials {
            let command = CreateMaterialCommand {
                user_id: actor,
                name: seed.name.clone(),
                description: seed.description,
            };
            record("material", &seed.name, self.materials.create(command).await)?;
            summary.materials += 1;
        }

        for seed in document.material_components {
            let name = seed.name.clone();
            let cost = seed
                .cost
                .map(|cost| Coins::new(cost.count, cost.piece_type))
                .transpose()
                .map_err(UseCaseError::from);
            let result = match cost {
                Ok(cost) => {
                    let command = CreateMaterialComponentCommand {
                        user_id: actor,
                        name: seed.name,
                        description: seed.description,
                        cost,
                        consumed: seed.consumed,
                    };
                    self.components.create(command).await
                }
                Err(error) => Err(error),
            };
            record("material component", &name, result)?;
            summary.material_components += 1;
        }

        for seed in document.creature_types {
            let command = CreateCreatureTypeCommand {
                user_id: actor,
                name: seed.name.clone(),
                description: seed.description,
            };
            record("creature type", &seed.name, self.creature_types.create(command).await)?;
            summary.creature_types += 1;
        }

        for seed in document.creature_sizes {
            let name = seed.name.clone();
            let result = match Length::new(seed.space.count, seed.space.unit) {
                Ok(space) => {
                    let command = CreateCreatureSizeCommand {
                        user_id: actor,
                        name: seed.name,
                        description: seed.description,
                        space,
                    };
                    self.creature_sizes.create(command).await
                }
                Err(error) => Err(error.into()),
            };
            record("creature size", &name, result)?;
            summary.creature_sizes += 1;
        }

        tracing::info!(
            users = summary.users,
            sources = summary.sources,
            materials = summary.materials,
            material_components = summary.material_components,
            creature_types = summary.creature_types,
            creature_sizes = summary.creature_sizes,
            "Seed imported"
        );
        Ok(summary)
    }
}

fn record<T>(
    category: &'static str,
    name: &str,
    result: Result<T, UseCaseError>,
) -> Result<T, SeedError> {
    result.map_err(|source| SeedError::Record {
        category,
        name: name.to_string(),
        source,
    })
}
