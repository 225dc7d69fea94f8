//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use factlens_extractor::ExtractorConfig;
use factlens_sdk::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available profiles
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Local extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// File this config was loaded from; `None` means the default location
    #[serde(skip)]
    source: Option<PathBuf>,
}

/// Backend profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Backend base URL
    pub api_url: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".factlens").join("config.toml"))
    }

    /// Load configuration from the default path, creating it if absent.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        let mut config = Self::load_or_init(&path)?;
        config.source = None;
        Ok(config)
    }

    /// Load configuration from `path`, writing defaults there if absent.
    ///
    /// An existing file that fails to parse or validate is left as is and
    /// the error returned.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        let mut config = Self::default();
        config.source = Some(path.to_path_buf());
        if let Err(e) = config.save_to(path) {
            warn!("Could not write default config to {}: {}", path.display(), e);
        }
        Ok(config)
    }

    /// Load configuration from `path`, or defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str::<Config>(&contents)?
        } else {
            Self::default()
        };
        config
            .extractor
            .validate()
            .map_err(|e| CliError::Config(format!("[extractor] {}", e)))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Save configuration to wherever it was loaded from.
    pub fn save(&self) -> Result<()> {
        match &self.source {
            Some(path) => self.save_to(path),
            None => self.save_to(&Self::path()?),
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the active profile.
    pub fn get_active_profile(&self) -> Result<&Profile> {
        self.profiles
            .get(&self.active_profile)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", self.active_profile)))
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        Ok(())
    }

    /// Whether output and logs use color, given the `--no-color` flag.
    pub fn color_enabled(&self, no_color: bool) -> bool {
        !no_color && self.settings.color
    }

    /// Client settings for the active profile, with `api_url` taking precedence.
    pub fn client_config(&self, api_url: Option<&str>) -> Result<ClientConfig> {
        let base_url = match api_url {
            Some(url) => url.to_string(),
            None => self.get_active_profile()?.api_url.clone(),
        };
        let config = ClientConfig::new(base_url);
        config.validate()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            "default".to_string(),
            Profile {
                api_url: DEFAULT_BASE_URL.to_string(),
            },
        );

        Self {
            active_profile: "default".to_string(),
            profiles,
            settings: Settings::default(),
            extractor: ExtractorConfig::default(),
            source: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}
