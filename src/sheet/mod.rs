//! Delimited sheet I/O.
//!
//! Sheets are UTF-8 delimited text with a configurable single-byte
//! separator (tab by default), first row = header. The mandatory columns
//! `Bundle`, `Domain`, `Key` are followed by one column per locale.

pub mod reader;
pub mod writer;

pub use reader::SheetReader;
pub use writer::{WriteOptions, write_table};

/// Columns every sheet must carry, in canonical order.
pub const MANDATORY_COLUMNS: [&str; 3] = ["Bundle", "Domain", "Key"];

/// Default cell separator.
pub const DEFAULT_SEPARATOR: u8 = b'\t';
