use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BudgeterError, Result};
use crate::importer::get_by_key;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_format() -> String {
    "bare".to_string()
}

fn default_output_prefix() -> String {
    "CONVERTED_".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            output_prefix: default_output_prefix(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    pub const KEYS: &'static [&'static str] = &["default_format", "output_prefix", "log_level"];

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "default_format" => Some(&self.default_format),
            "output_prefix" => Some(&self.output_prefix),
            "log_level" => Some(&self.log_level),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default_format" => {
                if get_by_key(value).is_none() {
                    return Err(BudgeterError::UnknownFormat(value.to_string()));
                }
                self.default_format = value.to_string();
            }
            "output_prefix" => self.output_prefix = value.to_string(),
            "log_level" => self.log_level = value.to_string(),
            _ => return Err(BudgeterError::Settings(format!("unknown setting: {key}"))),
        }
        Ok(())
    }
}

/// `$BUDGETER_CONFIG_DIR`, else `~/.config/budgeter`.
fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("BUDGETER_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("budgeter")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_from(&settings_path())
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_to(&settings_path(), settings)
}

fn load_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let content = std::fs::read_to_string(path).unwrap_or_default();
    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("ignoring unreadable settings file {}: {e}", path.display());
            Settings::default()
        }
    }
}

fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
