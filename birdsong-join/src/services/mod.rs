//! Pipeline stage implementations
//!
//! - Multimedia index builder
//! - Occurrence joiner and grouper
//! - Image enricher and the species media client it calls

pub mod image_enricher;
pub mod multimedia_index;
pub mod occurrence_grouper;
pub mod species_media_client;

pub use image_enricher::{project_pictures, Enrichment, ImageEnricher, ImageOverrides};
pub use multimedia_index::MultimediaIndex;
pub use occurrence_grouper::{OccurrenceGrouper, SpeciesGrouping};
pub use species_media_client::{
    GbifMediaClient, MediaItem, MediaLookupError, MediaResponse, SpeciesMediaLookup,
};
