//! Error taxonomy for the catalog pipeline.
//!
//! Every variant carries enough context (file path, row index, column or
//! locale name) for the caller to locate the offending data. All errors are
//! fatal to the current pipeline run; nothing is retried internally.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed sheet {path}")]
    Sheet {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}: mandatory column '{column}' is missing")]
    MissingColumn { path: PathBuf, column: String },

    #[error("{path}: locale column '{locale}' is missing")]
    MissingLocale { path: PathBuf, locale: String },

    #[error("{path}: row {row}: no value for locale '{locale}'")]
    MissingValue {
        path: PathBuf,
        row: usize,
        locale: String,
    },

    #[error("unknown bundle '{name}'")]
    UnknownBundle { name: String },

    #[error("bundle parent chain cycles back to '{name}'")]
    ParentCycle { name: String },

    #[error("separator must be a single ASCII character, got {value:?}")]
    InvalidSeparator { value: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
