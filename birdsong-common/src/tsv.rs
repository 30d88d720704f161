//! Tab-delimited row reading
//!
//! GBIF Darwin Core archives ship `occurrence.txt` and `multimedia.txt` as
//! unquoted, tab-separated tables with a header row. Rows are read lazily and
//! fields are resolved by header name, so a row that lacks a required column
//! surfaces as [`Error::MissingField`] rather than a silent empty value.

use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

/// Column name → position, shared by every row of one table
type ColumnIndex = Arc<HashMap<String, usize>>;

/// Reader over a tab-delimited table with a header row
pub struct TsvReader<R: Read> {
    inner: csv::Reader<R>,
    columns: ColumnIndex,
}

impl TsvReader<BufReader<File>> {
    /// Open a table on disk
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read> TsvReader<R> {
    /// Wrap any byte source; the first line is consumed as the header
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut inner = ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        // Duplicate header names resolve to the last column
        let columns = inner
            .headers()?
            .iter()
            .enumerate()
            .map(|(position, name)| (name.to_string(), position))
            .collect::<HashMap<_, _>>();

        Ok(Self {
            inner,
            columns: Arc::new(columns),
        })
    }

    /// Whether the header declares the given column
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Iterate remaining rows in file order
    pub fn rows(&mut self) -> impl Iterator<Item = Result<TsvRow>> + '_ {
        let columns = Arc::clone(&self.columns);
        self.inner.records().map(move |record| {
            Ok(TsvRow {
                columns: Arc::clone(&columns),
                record: record?,
            })
        })
    }
}

/// One data row with by-name field access
#[derive(Debug, Clone)]
pub struct TsvRow {
    columns: ColumnIndex,
    record: StringRecord,
}

impl TsvRow {
    /// 1-based line number in the source (header is line 1)
    pub fn line(&self) -> u64 {
        self.record.position().map(|p| p.line()).unwrap_or(0)
    }

    /// Field value by column name
    ///
    /// Fails with [`Error::MissingField`] when the header lacks the column or
    /// the row is too short to contain it.
    pub fn get(&self, field: &str) -> Result<&str> {
        self.columns
            .get(field)
            .and_then(|&position| self.record.get(position))
            .ok_or_else(|| Error::MissingField {
                field: field.to_string(),
                line: self.line(),
            })
    }

    /// Owned copy of a field value
    pub fn get_owned(&self, field: &str) -> Result<String> {
        self.get(field).map(str::to_string)
    }
}
