//! Configuration resolution for birdsong-join
//!
//! Each setting resolves with priority: command line / environment (both
//! carried by [`ConfigOverrides`]) → TOML config file → compiled default.

use crate::services::image_enricher::ImageOverrides;
use crate::services::species_media_client::{DEFAULT_LOOKUP_TIMEOUT, GBIF_API_BASE_URL};
use birdsong_common::config::{PicturePolicy, TomlConfig};
use birdsong_common::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_MULTIMEDIA_PATH: &str = "multimedia.txt";
pub const DEFAULT_OCCURRENCE_PATH: &str = "occurrence.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "pickled_data.json";
pub const DEFAULT_LOCATION: &str = "United Kingdom";

/// Values supplied on the command line or through environment variables
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub multimedia_path: Option<PathBuf>,
    pub occurrence_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub allowed_locations: Option<Vec<String>>,
    pub picture_policy: Option<PicturePolicy>,
    pub media_api_base_url: Option<String>,
    pub lookup_timeout_secs: Option<u64>,
    pub pretty: Option<bool>,
}

/// Fully resolved pipeline settings
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub multimedia_path: PathBuf,
    pub occurrence_path: PathBuf,
    pub output_path: PathBuf,
    /// Permitted `level0Name` values
    pub allowed_locations: Vec<String>,
    pub picture_policy: PicturePolicy,
    pub media_api_base_url: String,
    pub lookup_timeout: Duration,
    pub pretty: bool,
    pub image_overrides: ImageOverrides,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            multimedia_path: PathBuf::from(DEFAULT_MULTIMEDIA_PATH),
            occurrence_path: PathBuf::from(DEFAULT_OCCURRENCE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            allowed_locations: vec![DEFAULT_LOCATION.to_string()],
            picture_policy: PicturePolicy::default(),
            media_api_base_url: GBIF_API_BASE_URL.to_string(),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            pretty: false,
            image_overrides: ImageOverrides::curated(),
        }
    }
}

impl PipelineConfig {
    /// Merge overrides, config file and defaults, then validate
    pub fn resolve(overrides: ConfigOverrides, toml: TomlConfig) -> Result<Self> {
        let defaults = Self::default();

        let image_overrides = match toml.image_overrides {
            Some(table) => {
                info!(entries = table.len(), "Image overrides loaded from TOML config");
                ImageOverrides::from_config(table)
            }
            None => defaults.image_overrides,
        };

        let config = Self {
            multimedia_path: overrides
                .multimedia_path
                .or(toml.multimedia_path)
                .unwrap_or(defaults.multimedia_path),
            occurrence_path: overrides
                .occurrence_path
                .or(toml.occurrence_path)
                .unwrap_or(defaults.occurrence_path),
            output_path: overrides
                .output_path
                .or(toml.output_path)
                .unwrap_or(defaults.output_path),
            allowed_locations: overrides
                .allowed_locations
                .filter(|locations| !locations.is_empty())
                .or(toml.allowed_locations)
                .unwrap_or(defaults.allowed_locations),
            picture_policy: overrides
                .picture_policy
                .or(toml.picture_policy)
                .unwrap_or(defaults.picture_policy),
            media_api_base_url: overrides
                .media_api_base_url
                .or(toml.media_api_base_url)
                .unwrap_or(defaults.media_api_base_url),
            lookup_timeout: overrides
                .lookup_timeout_secs
                .or(toml.lookup_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.lookup_timeout),
            pretty: overrides.pretty.or(toml.pretty).unwrap_or(defaults.pretty),
            image_overrides,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.allowed_locations.is_empty() {
            return Err(Error::Config(
                "allowed_locations must name at least one location".to_string(),
            ));
        }

        if self.lookup_timeout.is_zero() {
            return Err(Error::Config(
                "lookup_timeout_secs must be greater than zero".to_string(),
            ));
        }

        if !(self.media_api_base_url.starts_with("http://")
            || self.media_api_base_url.starts_with("https://"))
        {
            return Err(Error::Config(format!(
                "media_api_base_url must be an http(s) URL, got '{}'",
                self.media_api_base_url
            )));
        }

        Ok(())
    }
}
