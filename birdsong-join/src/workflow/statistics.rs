//! Run statistics
//!
//! Counters accumulated across the stages of one pipeline run and logged on
//! completion.

use crate::services::image_enricher::Enrichment;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Counters for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Data rows read from the multimedia table
    pub multimedia_rows: usize,
    /// Audio records kept in the index
    pub audio_records: usize,
    /// Data rows read from the occurrence table
    pub occurrence_rows: usize,
    /// Rows dropped for a location outside the allow-set
    pub skipped_location: usize,
    /// Rows dropped for an empty species key
    pub skipped_no_species: usize,
    /// Songs attached to species entries
    pub songs: usize,
    /// Distinct species written
    pub species: usize,
    /// Species resolved from the override table
    pub overrides_applied: usize,
    /// Remote lookups issued
    pub lookups_attempted: usize,
    /// Remote lookups that failed
    pub lookup_failures: usize,
}

impl RunSummary {
    /// Count one species enrichment outcome
    pub fn record_enrichment(&mut self, enrichment: &Enrichment) {
        match enrichment {
            Enrichment::Override(_) => self.overrides_applied += 1,
            Enrichment::Fetched(_) => self.lookups_attempted += 1,
            Enrichment::Unavailable(_) => {
                self.lookups_attempted += 1;
                self.lookup_failures += 1;
            }
        }
    }

    pub fn display_string(&self) -> String {
        format!(
            "{} species, {} songs from {} occurrence rows ({} outside locations, {} without species key); \
             pictures: {} overrides, {} lookups, {} failed",
            self.species,
            self.songs,
            self.occurrence_rows,
            self.skipped_location,
            self.skipped_no_species,
            self.overrides_applied,
            self.lookups_attempted,
            self.lookup_failures
        )
    }

    pub fn log(&self) {
        info!(
            multimedia_rows = self.multimedia_rows,
            audio_records = self.audio_records,
            occurrence_rows = self.occurrence_rows,
            skipped_location = self.skipped_location,
            skipped_no_species = self.skipped_no_species,
            species = self.species,
            songs = self.songs,
            overrides_applied = self.overrides_applied,
            lookups_attempted = self.lookups_attempted,
            lookup_failures = self.lookup_failures,
            "Run complete"
        );
    }
}
