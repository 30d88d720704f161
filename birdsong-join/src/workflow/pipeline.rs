//! Pipeline driver
//!
//! Runs the stages strictly in order over the configured input files:
//! - **Index**: audio records from the multimedia table
//! - **Group**: occurrences joined, filtered and grouped per species, with
//!   one enrichment per new species
//! - **Serialize**: the species array written to the output file
//!
//! The index and grouping are locals of a single run, so a pipeline can be
//! run repeatedly. Output is written only after grouping succeeds; a fatal
//! fault leaves any existing output file untouched.

use super::serializer::write_species_file;
use super::statistics::RunSummary;
use crate::config::PipelineConfig;
use crate::services::{
    GbifMediaClient, ImageEnricher, MultimediaIndex, OccurrenceGrouper, SpeciesGrouping,
    SpeciesMediaLookup,
};
use birdsong_common::tsv::TsvReader;
use birdsong_common::{Error, Result};
use tracing::info;

/// Batch join pipeline over one configuration
pub struct JoinPipeline<L: SpeciesMediaLookup> {
    config: PipelineConfig,
    grouper: OccurrenceGrouper,
    enricher: ImageEnricher<L>,
}

impl JoinPipeline<GbifMediaClient> {
    /// Pipeline using the GBIF HTTP client from the configuration
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let client =
            GbifMediaClient::with_base_url(&config.media_api_base_url, config.lookup_timeout)
                .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_lookup(config, client))
    }
}

impl<L: SpeciesMediaLookup> JoinPipeline<L> {
    /// Pipeline with a caller-supplied media lookup
    pub fn with_lookup(config: PipelineConfig, lookup: L) -> Self {
        let grouper = OccurrenceGrouper::new(config.allowed_locations.iter().cloned());
        let enricher = ImageEnricher::new(
            lookup,
            config.image_overrides.clone(),
            config.picture_policy,
        );

        Self {
            config,
            grouper,
            enricher,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn enricher(&self) -> &ImageEnricher<L> {
        &self.enricher
    }

    /// Index and group without writing output
    pub async fn build_species(&self, summary: &mut RunSummary) -> Result<SpeciesGrouping> {
        let index = MultimediaIndex::from_path(&self.config.multimedia_path)?;
        summary.multimedia_rows = index.rows_read();
        summary.audio_records = index.len();

        info!(
            path = %self.config.occurrence_path.display(),
            locations = ?self.grouper.allowed_locations(),
            policy = %self.enricher.policy(),
            overrides = self.enricher.overrides().len(),
            "Joining occurrences"
        );
        let reader = TsvReader::open(&self.config.occurrence_path)?;

        self.grouper
            .group(reader, &index, &self.enricher, summary)
            .await
    }

    /// Run every stage and write the output file
    pub async fn run(&self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        let grouping = self.build_species(&mut summary).await?;
        write_species_file(&self.config.output_path, &grouping, self.config.pretty)?;

        summary.log();
        Ok(summary)
    }
}
