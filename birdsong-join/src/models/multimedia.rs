//! Multimedia records from the GBIF `multimedia.txt` extension

use birdsong_common::tsv::TsvRow;
use birdsong_common::Result;

/// `type` value marking audio recordings
pub const SOUND_TYPE: &str = "Sound";

/// One row of the multimedia table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultimediaRecord {
    /// Record identifier shared with the occurrence table (`gbifID`)
    pub gbif_id: String,
    /// Dublin Core media type (`Sound`, `StillImage`, ...)
    pub media_type: String,
    /// Source URI of the media file (`identifier`)
    pub identifier: String,
    pub license: String,
    pub rights_holder: String,
}

impl MultimediaRecord {
    /// Read the required columns from a multimedia row
    pub fn from_row(row: &TsvRow) -> Result<Self> {
        Ok(Self {
            gbif_id: row.get_owned("gbifID")?,
            media_type: row.get_owned("type")?,
            identifier: row.get_owned("identifier")?,
            license: row.get_owned("license")?,
            rights_holder: row.get_owned("rightsHolder")?,
        })
    }
}
