//! Occurrence joiner and grouper
//!
//! Streams the occurrence table, joins each kept row to its audio record and
//! accumulates songs per species key in first-sighting order.
//!
//! Per row, in order:
//! 1. Skip when `level0Name` is outside the allowed locations
//! 2. Skip when `speciesKey` is empty
//! 3. Look up `gbifID` in the multimedia index; no match aborts the run
//! 4. New species: capture descriptive fields and enrich exactly once
//! 5. Append the song to its species

use super::image_enricher::ImageEnricher;
use super::multimedia_index::MultimediaIndex;
use super::species_media_client::SpeciesMediaLookup;
use crate::models::{SongOccurrence, SpeciesEntry, SpeciesInfo};
use crate::workflow::RunSummary;
use birdsong_common::tsv::TsvReader;
use birdsong_common::{Error, Result};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::io::Read;
use tracing::{debug, info};

/// Species entries keyed by species key, in first-sighting order
pub type SpeciesGrouping = IndexMap<String, SpeciesEntry>;

/// Groups joined occurrences by species
#[derive(Debug, Clone)]
pub struct OccurrenceGrouper {
    allowed_locations: BTreeSet<String>,
}

impl OccurrenceGrouper {
    pub fn new<I, S>(allowed_locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_locations: allowed_locations.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allowed_locations(&self) -> &BTreeSet<String> {
        &self.allowed_locations
    }

    pub fn is_allowed(&self, location: &str) -> bool {
        self.allowed_locations.contains(location)
    }

    /// Join and group every row of the occurrence table
    ///
    /// Enrichment runs inline, awaited before the next row is read.
    pub async fn group<R, L>(
        &self,
        mut reader: TsvReader<R>,
        index: &MultimediaIndex,
        enricher: &ImageEnricher<L>,
        summary: &mut RunSummary,
    ) -> Result<SpeciesGrouping>
    where
        R: Read,
        L: SpeciesMediaLookup,
    {
        let mut grouping = SpeciesGrouping::new();

        for row in reader.rows() {
            let row = row?;
            summary.occurrence_rows += 1;

            if !self.is_allowed(row.get("level0Name")?) {
                summary.skipped_location += 1;
                continue;
            }

            let species_key = row.get("speciesKey")?;
            if species_key.is_empty() {
                summary.skipped_no_species += 1;
                continue;
            }

            let gbif_id = row.get("gbifID")?;
            let media = index.get(gbif_id).ok_or_else(|| Error::UnmatchedRecord {
                gbif_id: gbif_id.to_string(),
                line: row.line(),
            })?;
            let song = SongOccurrence::from_row(&row, media)?;

            if !grouping.contains_key(species_key) {
                let info = SpeciesInfo::from_row(&row)?;
                debug!(
                    species_key = %species_key,
                    scientific_name = %info.scientific_name,
                    "New species"
                );

                let enrichment = enricher.enrich(species_key).await;
                summary.record_enrichment(&enrichment);

                grouping.insert(
                    species_key.to_string(),
                    SpeciesEntry::new(info, enrichment.into_pictures()),
                );
                summary.species += 1;
            }

            if let Some(entry) = grouping.get_mut(species_key) {
                entry.push_song(song);
                summary.songs += 1;
            }
        }

        info!(
            rows = summary.occurrence_rows,
            species = summary.species,
            songs = summary.songs,
            "Occurrences grouped"
        );

        Ok(grouping)
    }
}
