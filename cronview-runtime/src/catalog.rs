use std::path::Path;

use config::Config;
use serde::Deserialize;
use tracing::{debug, info};

use crate::codec::decode;
use crate::config::{load_toml_config, load_yaml_config, resolve_config_value};
use crate::schedule::ScheduleConfig;

/// A named schedule as declared in the application config.
///
/// `cron` and `enabled` may carry `${key}` / `${key:default}`
/// placeholders; `enabled` stays a string so a placeholder can disable a
/// schedule per environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDefinition {
    pub name: String,
    pub cron: String,
    #[serde(default = "default_enabled")]
    pub enabled: String,
}

fn default_enabled() -> String {
    "true".to_string()
}

/// A catalog entry with its resolved expression and decoded preview
/// configuration.
#[derive(Debug, Clone)]
pub struct ScheduleEntry {
    pub name: String,
    pub cron: String,
    pub config: ScheduleConfig,
}

/// All enabled schedules declared under the `schedules` config key, in
/// declaration order.
#[derive(Debug, Clone, Default)]
pub struct ScheduleCatalog {
    pub entries: Vec<ScheduleEntry>,
}

impl ScheduleCatalog {
    /// Build the catalog from an already-loaded config.
    pub fn from_config(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let definitions: Vec<ScheduleDefinition> = match config.get("schedules") {
            Ok(definitions) => definitions,
            Err(_) => {
                debug!("no schedules declared in config");
                Vec::new()
            }
        };

        let mut entries = Vec::new();
        for definition in definitions {
            let enabled = resolve_config_value(&definition.enabled, config)?;
            if enabled.to_lowercase() == "false" {
                info!(name = %definition.name, "skipping disabled schedule");
                continue;
            }

            let cron = resolve_config_value(&definition.cron, config)?;
            let schedule = decode(Some(&cron));
            entries.push(ScheduleEntry {
                name: definition.name,
                cron,
                config: schedule,
            });
        }

        info!(schedules = entries.len(), "loaded schedule catalog");
        Ok(Self { entries })
    }

    /// Load the catalog from a TOML config file.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_config(&load_toml_config(path)?)
    }

    /// Load the catalog from a YAML config file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_config(&load_yaml_config(path)?)
    }

    /// Look up an entry by its declared name.
    pub fn get(&self, name: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}
