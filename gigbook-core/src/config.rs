//! User configuration.
//!
//! Lives at `~/.config/gigbook/config.toml`. Any key can be overridden with
//! a `GIGBOOK_` environment variable (`GIGBOOK_UPCOMING_LIMIT=5`, nested keys
//! use `__`: `GIGBOOK_RECURRENCE__MAX_INSTANCES=12`).

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{DEFAULT_UPCOMING_LIMIT, RecurrenceLimits};
use crate::error::{GigbookError, GigbookResult};

const DEFAULT_DEADLINE_DAYS: u32 = 7;

fn default_upcoming_limit() -> usize {
    DEFAULT_UPCOMING_LIMIT
}

fn default_deadline_days() -> u32 {
    DEFAULT_DEADLINE_DAYS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GigbookConfig {
    /// Cap on the upcoming events panel.
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,

    /// How far ahead the deadlines panel looks.
    #[serde(default = "default_deadline_days")]
    pub deadline_days: u32,

    #[serde(default)]
    pub recurrence: RecurrenceLimits,

    /// Workspace snapshot to load. `~` is expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for GigbookConfig {
    fn default() -> Self {
        GigbookConfig {
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            deadline_days: DEFAULT_DEADLINE_DAYS,
            recurrence: RecurrenceLimits::default(),
            data_file: None,
        }
    }
}

impl GigbookConfig {
    pub fn config_path() -> GigbookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GigbookError::Config("Could not determine config directory".into()))?
            .join("gigbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented-out config
    /// file on first run.
    pub fn load() -> GigbookResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (optional) layered under `GIGBOOK_*` variables.
    pub fn load_from(path: &Path) -> GigbookResult<Self> {
        let config: GigbookConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("GIGBOOK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| GigbookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| GigbookError::Config(e.to_string()))?;

        debug!(target: "gigbook::config", path = %path.display(), "Loaded config");

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> GigbookResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GigbookError::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)
            .map_err(|e| GigbookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Write a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> GigbookResult<()> {
        let contents = format!(
            "\
# gigbook configuration

# Workspace snapshot (JSON) to load:
# data_file = \"~/gigbook/workspace.json\"

# Number of events shown in the upcoming panel:
# upcoming_limit = {}

# Days ahead covered by the deadlines panel:
# deadline_days = {}

# Bounds for recurring events without an explicit count/until:
# [recurrence]
# max_instances = {}
# horizon_days = {}
",
            DEFAULT_UPCOMING_LIMIT,
            DEFAULT_DEADLINE_DAYS,
            RecurrenceLimits::default().max_instances,
            RecurrenceLimits::default().horizon_days,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GigbookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| GigbookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// `data_file` with `~` expanded.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file.as_ref().map(|p| {
            let expanded = shellexpand::tilde(&p.to_string_lossy()).into_owned();
            PathBuf::from(expanded)
        })
    }
}
