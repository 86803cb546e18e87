use anyhow::{ensure, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::BTreeSet;

use crate::domain::entities::{AllowedOperation, ApplicationPermission, PermissionKey};
use crate::domain::error::IdentityError;

const DEFAULT_CONFIG_PATH: &str = "identity.toml";

fn default_log_filter() -> String {
    "info".to_string()
}

const fn default_event_channel_capacity() -> usize {
    64
}

fn default_allowed_operations() -> BTreeSet<AllowedOperation> {
    [AllowedOperation::Read].into_iter().collect()
}

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Buffered events per subscriber before it starts lagging
    #[serde(default = "default_event_channel_capacity")]
    pub event_channel_capacity: usize,

    /// Permissions present at startup
    #[serde(default)]
    pub grants: Vec<GrantSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrantSeed {
    pub application_identifier: String,
    pub permittable_group_identifier: String,
    #[serde(default = "default_allowed_operations")]
    pub allowed_operations: BTreeSet<AllowedOperation>,
}

impl Settings {
    /// Loads `.env`, then the file named by IDENTITY_CONFIG (optional),
    /// then `IDENTITY__*` environment variables.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let path = std::env::var("IDENTITY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let config = Config::builder()
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix("IDENTITY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {path}"))?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self> {
        let settings: Settings = config
            .try_deserialize()
            .context("Invalid configuration")?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.event_channel_capacity > 0, "event_channel_capacity must be positive");
        self.seed_permissions()
            .context("Invalid grant in configuration")?;
        Ok(())
    }

    pub fn seed_permissions(&self) -> Result<Vec<ApplicationPermission>, IdentityError> {
        self.grants
            .iter()
            .map(|seed| {
                let key = PermissionKey::parse(
                    seed.application_identifier.clone(),
                    seed.permittable_group_identifier.clone(),
                )?;
                Ok(ApplicationPermission::grant(key, seed.allowed_operations.clone()))
            })
            .collect()
    }
}
