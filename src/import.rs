//! Import pipeline: delimited sheet → [`TranslationTable`].
//!
//! Validates the header schema up front, then streams data rows through the
//! bundle/domain filter. A row that omits a cell for an explicitly requested
//! locale aborts the whole import; no partial table is returned.

use std::path::Path;

use crate::catalog::escape::unescape_newlines;
use crate::catalog::{Selector, TranslationTable};
use crate::error::{CatalogError, Result};
use crate::sheet::{MANDATORY_COLUMNS, SheetReader};

/// What to pull out of a sheet during import.
///
/// Locales are always explicit here: the import side never wildcards them,
/// the export side resolves `all` before building its filter.
#[derive(Debug, Clone)]
pub struct ImportFilter {
    pub bundles: Selector,
    pub domains: Selector,
    pub locales: Vec<String>,
    pub separator: u8,
}

/// Parse one sheet into a table, honoring the filter.
pub fn import_file(path: &Path, filter: &ImportFilter) -> Result<TranslationTable> {
    let reader = SheetReader::open(path, filter.separator)?;
    let header = reader.header();

    let mut mandatory_columns = [0usize; 3];
    for (slot, column) in mandatory_columns.iter_mut().zip(MANDATORY_COLUMNS) {
        *slot = header
            .index_of(column)
            .ok_or_else(|| CatalogError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            })?;
    }
    let [bundle_column, domain_column, key_column] = mandatory_columns;

    let locale_columns: Vec<(String, usize)> = filter
        .locales
        .iter()
        .map(|locale| {
            header
                .index_of(locale)
                .map(|column| (locale.clone(), column))
                .ok_or_else(|| CatalogError::MissingLocale {
                    path: path.to_path_buf(),
                    locale: locale.clone(),
                })
        })
        .collect::<Result<_>>()?;

    let mut table = TranslationTable::new();

    for row in reader.rows() {
        let row = row?;

        let bundle = row.get(bundle_column).unwrap_or_default();
        let domain = row.get(domain_column).unwrap_or_default();
        let key = row.get(key_column).unwrap_or_default();

        // Rows without a bundle, domain, and key never contribute.
        if bundle.is_empty() || domain.is_empty() || key.is_empty() {
            continue;
        }

        if !filter.bundles.matches(bundle) || !filter.domains.matches(domain) {
            continue;
        }

        for (locale, column) in &locale_columns {
            let cell = row.get(*column).ok_or_else(|| CatalogError::MissingValue {
                path: path.to_path_buf(),
                row: row.index,
                locale: locale.clone(),
            })?;

            let value = unescape_newlines(cell);
            if !value.is_empty() {
                table.insert(bundle, domain, key, locale, &value);
            }
        }
    }

    Ok(table)
}
