//! Multimedia index builder
//!
//! Reads the multimedia table and keeps only audio records, keyed by `gbifID`.
//! Later rows with the same identifier replace earlier ones.

use crate::models::{MultimediaRecord, SOUND_TYPE};
use birdsong_common::tsv::TsvReader;
use birdsong_common::Result;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Audio records keyed by record identifier
#[derive(Debug, Default)]
pub struct MultimediaIndex {
    records: HashMap<String, MultimediaRecord>,
    rows_read: usize,
}

impl MultimediaIndex {
    /// Build the index from a multimedia table on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "Indexing multimedia records");
        let index = Self::build(TsvReader::open(path)?)?;
        info!(
            rows = index.rows_read,
            audio_records = index.len(),
            "Multimedia index built"
        );
        Ok(index)
    }

    /// Build the index from an open table
    pub fn build<R: Read>(mut reader: TsvReader<R>) -> Result<Self> {
        let mut index = Self::default();

        for row in reader.rows() {
            let row = row?;
            index.rows_read += 1;

            // Other columns are only required of audio rows
            if row.get("type")? != SOUND_TYPE {
                continue;
            }
            let record = MultimediaRecord::from_row(&row)?;

            if let Some(previous) = index.records.insert(record.gbif_id.clone(), record) {
                debug!(gbif_id = %previous.gbif_id, line = row.line(), "Duplicate audio record replaced");
            }
        }

        Ok(index)
    }

    pub fn get(&self, gbif_id: &str) -> Option<&MultimediaRecord> {
        self.records.get(gbif_id)
    }

    /// Number of audio records indexed
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Data rows read, including non-audio rows
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }
}
