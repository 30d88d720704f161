//! Data models for birdsong-join
//!
//! - Multimedia records indexed from `multimedia.txt`
//! - Species entries and song occurrences written to the output document

pub mod multimedia;
pub mod species;

pub use multimedia::{MultimediaRecord, SOUND_TYPE};
pub use species::{SongOccurrence, SpeciesEntry, SpeciesInfo};
