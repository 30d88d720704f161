//! Output serialization
//!
//! Writes the species entries, in sighting order, as a single JSON array.

use crate::models::SpeciesEntry;
use crate::services::occurrence_grouper::SpeciesGrouping;
use birdsong_common::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Serialize the grouping's values to any writer
pub fn write_species<W: Write>(writer: W, grouping: &SpeciesGrouping, pretty: bool) -> Result<()> {
    let entries: Vec<&SpeciesEntry> = grouping.values().collect();
    if pretty {
        serde_json::to_writer_pretty(writer, &entries)?;
    } else {
        serde_json::to_writer(writer, &entries)?;
    }
    Ok(())
}

/// Write the output document, replacing any existing file
pub fn write_species_file(path: &Path, grouping: &SpeciesGrouping, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_species(&mut writer, grouping, pretty)?;
    writer.flush()?;

    info!(path = %path.display(), species = grouping.len(), "Output written");
    Ok(())
}
