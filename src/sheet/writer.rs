//! Sheet serialization.
//!
//! Renders a [`TranslationTable`] back to delimited text. Rows follow the
//! table's insertion order; locale columns follow the caller-supplied
//! ordering (the reference locale first, by the time this is called).
//! Missing values serialize as empty cells and are never an error here,
//! only a filtering signal for `only_missing`.

use std::io::{self, Write};

use crate::catalog::escape::escape_newlines;
use crate::catalog::TranslationTable;
use crate::catalog::table::LocaleValues;
use crate::sheet::MANDATORY_COLUMNS;

/// UTF-8 byte-order mark, written raw before any delimited content.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone)]
pub struct WriteOptions {
    pub separator: u8,
    /// Emit only rows where at least one requested locale has no value.
    pub only_missing: bool,
    /// Prefix the output with the UTF-8 byte-order mark.
    pub include_bom: bool,
}

/// Serialize the table. Returns the number of data rows written.
pub fn write_table<W: Write>(
    table: &TranslationTable,
    locales: &[String],
    options: &WriteOptions,
    out: &mut W,
) -> io::Result<usize> {
    if options.include_bom {
        out.write_all(UTF8_BOM)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.separator)
        .from_writer(&mut *out);

    let mut header: Vec<&str> = MANDATORY_COLUMNS.to_vec();
    header.extend(locales.iter().map(String::as_str));
    writer.write_record(&header).map_err(io::Error::other)?;

    let mut rows_written = 0;
    for (bundle, domains) in table.bundles() {
        for (domain, keys) in domains {
            for (key, values) in keys {
                if !should_export_row(values, locales, options.only_missing) {
                    continue;
                }

                let mut row: Vec<String> =
                    vec![bundle.to_string(), domain.clone(), key.clone()];
                row.extend(locales.iter().map(|locale| {
                    values
                        .get(locale)
                        .map(|value| escape_newlines(value))
                        .unwrap_or_default()
                }));
                writer.write_record(&row).map_err(io::Error::other)?;
                rows_written += 1;
            }
        }
    }

    writer.flush()?;
    Ok(rows_written)
}

/// Row filter: with `only_missing`, keep only incomplete translation sets.
pub fn should_export_row(values: &LocaleValues, locales: &[String], only_missing: bool) -> bool {
    if !only_missing {
        return true;
    }
    locales.iter().any(|locale| !values.contains_key(locale))
}
