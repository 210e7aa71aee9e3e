//! Locsheet - translation catalog sheets, imported and exported
//!
//! Locsheet is a CLI tool and library for moving localized strings between
//! per-bundle translation sheets and a single cross-locale catalog sheet.
//! Sheets are delimited text (tab-separated by default) with the mandatory
//! columns `Bundle`, `Domain`, `Key` followed by one column per locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `catalog`: The in-memory translation table and its filters
//! - `sheet`: Delimited sheet reading and writing
//! - `import`: Sheet → table pipeline with schema validation
//! - `export`: Multi-bundle aggregation and serialization
//! - `bundles`: Bundle registry and sheet discovery collaborators
//! - `reporter`: Progress reporting seam
//! - `error`: The pipeline error taxonomy

pub mod bundles;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod reporter;
pub mod sheet;
