//! Lazy sheet reading.
//!
//! The reader is forward-only and single-pass: rows are pulled one at a
//! time off the underlying file, so importing a very large catalog never
//! buffers the raw sheet in memory. Restarting means reopening the source.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};

use crate::error::{CatalogError, Result};

/// Header of an open sheet: column name → position.
#[derive(Debug, Clone)]
pub struct Header {
    columns: Vec<String>,
}

impl Header {
    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.index_of(column).is_some()
    }
}

/// An open sheet with its header parsed.
#[derive(Debug)]
pub struct SheetReader {
    path: PathBuf,
    reader: csv::Reader<File>,
    header: Header,
}

impl SheetReader {
    /// Open a sheet and parse its first row as the header.
    ///
    /// Short or long data rows are tolerated at this level (`flexible`);
    /// absent cells surface as `None` from [`Row::get`].
    pub fn open(path: &Path, separator: u8) -> Result<Self> {
        let file = File::open(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                CatalogError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let mut reader = ReaderBuilder::new()
            .delimiter(separator)
            .flexible(true)
            .has_headers(true)
            .from_reader(file);

        let header = Header {
            columns: reader
                .headers()
                .map_err(|source| CatalogError::Sheet {
                    path: path.to_path_buf(),
                    source,
                })?
                .iter()
                .map(str::to_string)
                .collect(),
        };

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            header,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Consume the reader, yielding data rows in file order.
    pub fn rows(self) -> Rows {
        Rows {
            path: self.path,
            records: self.reader.into_records(),
            next_index: 1,
        }
    }
}

/// One data row, numbered from 1 (the header is row 0).
#[derive(Debug)]
pub struct Row {
    pub index: usize,
    record: StringRecord,
}

impl Row {
    /// Cell at the given column, or `None` when the row is too short.
    pub fn get(&self, column: usize) -> Option<&str> {
        self.record.get(column)
    }
}

/// Forward-only iterator over data rows.
pub struct Rows {
    path: PathBuf,
    records: csv::StringRecordsIntoIter<File>,
    next_index: usize,
}

impl Iterator for Rows {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        let index = self.next_index;
        self.next_index += 1;

        Some(match record {
            Ok(record) => Ok(Row { index, record }),
            Err(source) => Err(CatalogError::Sheet {
                path: self.path.clone(),
                source,
            }),
        })
    }
}
