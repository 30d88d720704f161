//! Fake species media services
//!
//! `FakeLookup` replaces the HTTP client in-process; `FakeGbifServer` serves
//! the GBIF media route over real HTTP for exercising `GbifMediaClient`.

use async_trait::async_trait;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use birdsong_join::services::{MediaItem, MediaLookupError, SpeciesMediaLookup};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn media_item(identifier: &str, rights_holder: &str, media_type: Option<&str>) -> MediaItem {
    MediaItem {
        identifier: identifier.to_string(),
        rights_holder: Some(rights_holder.to_string()),
        media_type: media_type.map(str::to_string),
    }
}

/// Canned reply for one species
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Items(Vec<MediaItem>),
    Status(u16),
}

/// In-process lookup recording every species key requested
pub struct FakeLookup {
    responses: HashMap<String, FakeResponse>,
    calls: Mutex<Vec<String>>,
}

impl FakeLookup {
    /// Every species lists no media
    pub fn empty() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with(mut self, species_key: &str, response: FakeResponse) -> Self {
        self.responses.insert(species_key.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, species_key: &str) -> usize {
        self.calls().iter().filter(|k| *k == species_key).count()
    }
}

#[async_trait]
impl SpeciesMediaLookup for FakeLookup {
    async fn lookup_media(&self, species_key: &str) -> Result<Vec<MediaItem>, MediaLookupError> {
        self.calls.lock().unwrap().push(species_key.to_string());

        match self.responses.get(species_key) {
            Some(FakeResponse::Items(items)) => Ok(items.clone()),
            Some(FakeResponse::Status(status)) => {
                Err(MediaLookupError::Api(*status, "fake failure".to_string()))
            }
            None => Ok(Vec::new()),
        }
    }
}

struct ServerState {
    routes: HashMap<String, (u16, String)>,
    delay: Option<Duration>,
    hits: Mutex<Vec<String>>,
}

/// Local HTTP server answering `/v1/species/{key}/media`
pub struct FakeGbifServer {
    pub base_url: String,
    state: Arc<ServerState>,
}

impl FakeGbifServer {
    /// Serve canned `(status, body)` pairs; unknown keys get `{"results":[]}`
    pub async fn start(routes: HashMap<String, (u16, String)>) -> Self {
        Self::start_with_delay(routes, None).await
    }

    pub async fn start_with_delay(
        routes: HashMap<String, (u16, String)>,
        delay: Option<Duration>,
    ) -> Self {
        let state = Arc::new(ServerState {
            routes,
            delay,
            hits: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/species/:key/media", get(species_media))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/v1", addr),
            state,
        }
    }

    pub fn hits(&self) -> Vec<String> {
        self.state.hits.lock().unwrap().clone()
    }
}

async fn species_media(
    State(state): State<Arc<ServerState>>,
    Path(key): Path<String>,
) -> (StatusCode, String) {
    state.hits.lock().unwrap().push(key.clone());

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    match state.routes.get(&key) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body.clone(),
        ),
        None => (StatusCode::OK, r#"{"results":[]}"#.to_string()),
    }
}
