//! Configuration management
//!
//! Settings live in `settings.json` inside the MiniBank data directory:
//! ```json
//! {
//!   "app": { "jsonOutput": false, "loggingEnabled": true, ... }
//! }
//! ```
//! Keys this crate does not manage are preserved when saving.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    json_output: bool,
    #[serde(default = "default_logging_enabled")]
    logging_enabled: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            json_output: false,
            logging_enabled: default_logging_enabled(),
            other: HashMap::new(),
        }
    }
}

fn default_logging_enabled() -> bool {
    true
}

/// MiniBank configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// Print command results as JSON instead of tables
    pub json_output: bool,
    /// Record command events in the local event log
    pub logging_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json_output: false,
            logging_enabled: default_logging_enabled(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// A missing or unreadable settings file yields the defaults. Each flag
    /// can be overridden through the environment:
    /// `MINIBANK_JSON_OUTPUT` and `MINIBANK_LOGGING`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let raw = read_settings(data_dir)?;

        let json_output = env_flag("MINIBANK_JSON_OUTPUT").unwrap_or(raw.app.json_output);
        let logging_enabled = env_flag("MINIBANK_LOGGING").unwrap_or(raw.app.logging_enabled);

        Ok(Self {
            json_output,
            logging_enabled,
        })
    }

    /// Save config to the data directory
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let mut settings = read_settings(data_dir)?;

        // Only touch the fields we manage
        settings.app.json_output = self.json_output;
        settings.app.logging_enabled = self.logging_enabled;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(data_dir.join(SETTINGS_FILE), content)?;
        Ok(())
    }

    pub fn set_json_output(&mut self, enabled: bool) {
        self.json_output = enabled;
    }

    pub fn set_logging_enabled(&mut self, enabled: bool) {
        self.logging_enabled = enabled;
    }
}

fn read_settings(data_dir: &Path) -> Result<SettingsFile> {
    let settings_path = data_dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

/// Parse a boolean override from the environment, if set to a known value
fn env_flag(name: &str) -> Option<bool> {
    parse_flag(std::env::var(name).ok().as_deref())
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("true" | "1" | "yes" | "TRUE" | "YES") => Some(true),
        Some("false" | "0" | "no" | "FALSE" | "NO") => Some(false),
        _ => None,
    }
}
