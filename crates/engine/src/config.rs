//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Name of the user created at startup; seeds are imported as this user
    pub admin_name: String,
    /// Optional JSON seed document imported at startup
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let admin_name = lookup("COMPENDIUM_ADMIN_NAME")
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|| "admin".to_string());
        if admin_name.is_empty() {
            bail!("COMPENDIUM_ADMIN_NAME must not be blank");
        }

        let seed_path = lookup("COMPENDIUM_SEED_PATH")
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            admin_name,
            seed_path,
        })
    }
}
