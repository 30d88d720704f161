//! Configuration file model and config file resolution

use crate::{Error, PictureRef, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "BIRDSONG_CONFIG";

/// How pictures are projected from a remote species-media response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PicturePolicy {
    /// Keep only `StillImage` results, recorded as `{src, rightsHolder}`
    #[default]
    StillImages,
    /// Keep every result, recorded as a bare URI
    AllMedia,
}

impl PicturePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StillImages => "still_images",
            Self::AllMedia => "all_media",
        }
    }
}

impl fmt::Display for PicturePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PicturePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "still_images" => Ok(Self::StillImages),
            "all_media" => Ok(Self::AllMedia),
            other => Err(Error::Config(format!(
                "unknown picture policy '{}' (expected still_images or all_media)",
                other
            ))),
        }
    }
}

/// Override table value: one picture or a list of them
///
/// `List` must stay first: untagged struct variants also accept sequences, so a
/// two-string array would otherwise parse as an attributed picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideEntry {
    List(Vec<PictureRef>),
    Single(PictureRef),
}

impl OverrideEntry {
    pub fn into_pictures(self) -> Vec<PictureRef> {
        match self {
            Self::Single(picture) => vec![picture],
            Self::List(pictures) => pictures,
        }
    }
}

/// Logging section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Contents of `config.toml`
///
/// Every key is optional; absent keys fall through to compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub multimedia_path: Option<PathBuf>,
    pub occurrence_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub allowed_locations: Option<Vec<String>>,
    pub picture_policy: Option<PicturePolicy>,
    pub media_api_base_url: Option<String>,
    pub lookup_timeout_secs: Option<u64>,
    pub pretty: Option<bool>,
    pub logging: LoggingConfig,
    /// Species key → override pictures; `None` selects the built-in table
    pub image_overrides: Option<BTreeMap<String, OverrideEntry>>,
}

impl TomlConfig {
    /// Parse TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Read TOML failed ({}): {}", path.display(), e))
        })?;
        Self::parse(&content)
    }
}

/// Config file resolution, in priority order:
/// 1. Command-line argument
/// 2. `BIRDSONG_CONFIG` environment variable
/// 3. `<config_dir>/birdsong/config.toml`, when it exists
///
/// Returns `None` when no config file applies; compiled defaults are used.
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    default_config_path().filter(|path| path.exists())
}

/// Platform config location, e.g. `~/.config/birdsong/config.toml` on Linux
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("birdsong").join("config.toml"))
}

/// Resolve and load the config file, or defaults when none applies
pub fn load_config(cli_arg: Option<&Path>) -> Result<(TomlConfig, Option<PathBuf>)> {
    match resolve_config_path(cli_arg) {
        Some(path) => {
            debug!("Loading config file: {}", path.display());
            Ok((TomlConfig::load(&path)?, Some(path)))
        }
        None => Ok((TomlConfig::default(), None)),
    }
}
