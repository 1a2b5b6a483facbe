use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Default configuration
pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_PEER_NAME: &str = "Mina";
pub const DEFAULT_MERGE_DELAY_MS: u64 = 1000;
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 50;

const MERGE_DELAY_RANGE: (u64, u64) = (100, 10_000);
const REVEAL_DELAY_MAX: u64 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User settings, persisted as JSON next to other per-user config.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// "dark" or "light"
    pub theme: String,
    /// Debounce between the last message and the merge pass.
    pub merge_delay_ms: u64,
    /// Delay before new bridges fade in.
    pub bridge_reveal_delay_ms: u64,
    /// Name shown in the chat header.
    pub peer_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            merge_delay_ms: DEFAULT_MERGE_DELAY_MS,
            bridge_reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            peer_name: DEFAULT_PEER_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Clamp values into usable ranges and fix unknown themes.
    pub fn sanitized(mut self) -> Self {
        if self.theme != "dark" && self.theme != "light" {
            self.theme = DEFAULT_THEME.to_string();
        }
        let (lo, hi) = MERGE_DELAY_RANGE;
        self.merge_delay_ms = self.merge_delay_ms.clamp(lo, hi);
        self.bridge_reveal_delay_ms = self.bridge_reveal_delay_ms.min(REVEAL_DELAY_MAX);
        if self.peer_name.trim().is_empty() {
            self.peer_name = DEFAULT_PEER_NAME.to_string();
        }
        self
    }
}

pub fn settings_path() -> Result<PathBuf, ConfigError> {
    let proj =
        ProjectDirs::from("com", "liquidchat", "liquid-chat").ok_or(ConfigError::NoConfigDir)?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("settings.json"))
}

/// Load settings from the default location. A missing file yields defaults.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(&settings_path()?)
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings.sanitized())
}

pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    save_settings_to(&settings_path()?, settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
