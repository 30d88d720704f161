//! GBIF species media API client
//!
//! Fetches the media list for a species key from
//! `GET {base_url}/species/{speciesKey}/media`.
//!
//! One request per call, no retries and no rate limiting: the pipeline makes
//! at most one call per species per run.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// GBIF v1 API base URL
pub const GBIF_API_BASE_URL: &str = "https://api.gbif.org/v1";

/// Bounded wait for a single species media request
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

const USER_AGENT: &str = concat!("birdsong-join/", env!("CARGO_PKG_VERSION"));

/// Species media lookup errors
#[derive(Debug, Error)]
pub enum MediaLookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Species media response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediaResponse {
    pub results: Vec<MediaItem>,
}

/// One media result
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MediaItem {
    /// Media URI
    pub identifier: String,
    /// Often absent on sound and video items
    #[serde(rename = "rightsHolder", default)]
    pub rights_holder: Option<String>,
    /// Dublin Core type, e.g. `StillImage`
    #[serde(rename = "type", default)]
    pub media_type: Option<String>,
}

/// Source of species media listings
///
/// Implemented by [`GbifMediaClient`]; tests substitute in-process fakes.
#[async_trait]
pub trait SpeciesMediaLookup: Send + Sync {
    /// Fetch every media item listed for a species
    async fn lookup_media(&self, species_key: &str) -> Result<Vec<MediaItem>, MediaLookupError>;
}

/// HTTP client for the GBIF species media endpoint
pub struct GbifMediaClient {
    http_client: Client,
    base_url: String,
    timeout: Duration,
}

impl GbifMediaClient {
    /// Client against the public GBIF API with the default timeout
    pub fn new() -> Result<Self, MediaLookupError> {
        Self::with_base_url(GBIF_API_BASE_URL, DEFAULT_LOOKUP_TIMEOUT)
    }

    /// Client against another API root (mirror or test server)
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, MediaLookupError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| MediaLookupError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn media_url(&self, species_key: &str) -> String {
        format!("{}/species/{}/media", self.base_url, species_key)
    }
}

#[async_trait]
impl SpeciesMediaLookup for GbifMediaClient {
    async fn lookup_media(&self, species_key: &str) -> Result<Vec<MediaItem>, MediaLookupError> {
        let url = self.media_url(species_key);
        debug!(species_key = %species_key, url = %url, "Querying GBIF species media");

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                MediaLookupError::Timeout(self.timeout)
            } else {
                MediaLookupError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MediaLookupError::Api(status.as_u16(), body));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                MediaLookupError::Timeout(self.timeout)
            } else {
                MediaLookupError::Network(e.to_string())
            }
        })?;

        let media: MediaResponse =
            serde_json::from_slice(&body).map_err(|e| MediaLookupError::Parse(e.to_string()))?;

        debug!(
            species_key = %species_key,
            results = media.results.len(),
            "GBIF species media retrieved"
        );

        Ok(media.results)
    }
}
