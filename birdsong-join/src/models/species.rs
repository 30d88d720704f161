//! Species entries and their song occurrences
//!
//! Serialized field names follow the output document consumed downstream:
//! descriptive fields keep their Darwin Core names, the picture and occurrence
//! lists are `_pictures` / `_occurrences`, and the audio reference fields of a
//! song carry a `__` prefix.

use super::MultimediaRecord;
use birdsong_common::tsv::TsvRow;
use birdsong_common::{PictureRef, Result};
use serde::{Deserialize, Serialize};

/// Taxonomic descriptive fields copied from an occurrence row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    #[serde(rename = "scientificName")]
    pub scientific_name: String,
    #[serde(rename = "higherClassification")]
    pub higher_classification: String,
    pub kingdom: String,
    pub phylum: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub order: String,
    pub family: String,
    pub genus: String,
    #[serde(rename = "vernacularName")]
    pub vernacular_name: String,
    #[serde(rename = "speciesKey")]
    pub species_key: String,
}

impl SpeciesInfo {
    pub fn from_row(row: &TsvRow) -> Result<Self> {
        Ok(Self {
            scientific_name: row.get_owned("scientificName")?,
            higher_classification: row.get_owned("higherClassification")?,
            kingdom: row.get_owned("kingdom")?,
            phylum: row.get_owned("phylum")?,
            class_name: row.get_owned("class")?,
            order: row.get_owned("order")?,
            family: row.get_owned("family")?,
            genus: row.get_owned("genus")?,
            vernacular_name: row.get_owned("vernacularName")?,
            species_key: row.get_owned("speciesKey")?,
        })
    }
}

/// One audio recording of a species, joined from both tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongOccurrence {
    /// Audio file URI from the multimedia record
    #[serde(rename = "__birdsong")]
    pub recording_uri: String,
    #[serde(rename = "__license")]
    pub license: String,
    #[serde(rename = "__rightsHolder")]
    pub rights_holder: String,
    pub sex: String,
    #[serde(rename = "fieldNotes")]
    pub field_notes: String,
    #[serde(rename = "gbifID")]
    pub gbif_id: String,
    #[serde(rename = "level0Name")]
    pub level0_name: String,
    #[serde(rename = "level1Name")]
    pub level1_name: String,
    #[serde(rename = "level2Name")]
    pub level2_name: String,
}

impl SongOccurrence {
    /// Combine an occurrence row with its matched audio record
    pub fn from_row(row: &TsvRow, media: &MultimediaRecord) -> Result<Self> {
        Ok(Self {
            recording_uri: media.identifier.clone(),
            license: media.license.clone(),
            rights_holder: media.rights_holder.clone(),
            sex: row.get_owned("sex")?,
            field_notes: row.get_owned("fieldNotes")?,
            gbif_id: row.get_owned("gbifID")?,
            level0_name: row.get_owned("level0Name")?,
            level1_name: row.get_owned("level1Name")?,
            level2_name: row.get_owned("level2Name")?,
        })
    }
}

/// Output unit: one species with its songs and pictures
///
/// `info` is fixed when the entry is created from the first row seen for the
/// species; later rows only append to `occurrences`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    #[serde(flatten)]
    pub info: SpeciesInfo,
    /// `None` when enrichment failed; `Some(vec![])` when it found nothing
    #[serde(rename = "_pictures", default, skip_serializing_if = "Option::is_none")]
    pub pictures: Option<Vec<PictureRef>>,
    #[serde(rename = "_occurrences", default)]
    pub occurrences: Vec<SongOccurrence>,
}

impl SpeciesEntry {
    pub fn new(info: SpeciesInfo, pictures: Option<Vec<PictureRef>>) -> Self {
        Self {
            info,
            pictures,
            occurrences: Vec::new(),
        }
    }

    pub fn species_key(&self) -> &str {
        &self.info.species_key
    }

    pub fn push_song(&mut self, song: SongOccurrence) {
        self.occurrences.push(song);
    }
}
