//! Export aggregator: discover sheets, funnel each through the import
//! pipeline, merge into one table, serialize once.
//!
//! Aggregation is strictly sequential and atomic: the output file is only
//! written after every source has imported cleanly, so a schema or row
//! error in any source leaves no partial output behind.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::bundles::{BundleHandle, BundleRegistry, FileFinder, parse_sheet_name};
use crate::catalog::{LocaleSelection, Selector, TranslationTable};
use crate::error::{CatalogError, Result};
use crate::import::{ImportFilter, import_file};
use crate::reporter::Reporter;
use crate::sheet::writer::{WriteOptions, write_table};

/// Reserved bundle token for the application's own translations.
pub const APP_BUNDLE: &str = "app";
/// Reserved bundle token expanding to the application scope plus every
/// registered bundle.
pub const ALL_BUNDLES: &str = "all";

#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Bundle names to export, in order. May contain the reserved tokens
    /// `app` and `all`.
    pub bundles: Vec<String>,
    /// Domain names, with the usual `["all"]` sentinel.
    pub domains: Vec<String>,
    pub locales: LocaleSelection,
    /// Always exported and always the first locale column.
    pub reference_locale: String,
    pub separator: u8,
    pub only_missing: bool,
    pub include_bom: bool,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub files_read: usize,
    pub rows_written: usize,
    /// Final locale column order.
    pub locales: Vec<String>,
    pub output: PathBuf,
}

/// Run the full export: discovery, aggregation, serialization.
pub fn export(
    settings: &ExportSettings,
    registry: &dyn BundleRegistry,
    finder: &dyn FileFinder,
    reporter: &dyn Reporter,
) -> Result<ExportSummary> {
    let domains = Selector::from_tokens(settings.domains.iter().cloned());
    let files = collect_files(settings, &domains, registry, finder, reporter)?;

    let locales = order_locales(
        &settings.reference_locale,
        resolve_locales(&settings.locales, &files),
    );

    // No bundle/domain restriction here beyond what discovery already
    // applied; the finder only handed back matching sheets.
    let filter = ImportFilter {
        bundles: Selector::All,
        domains: Selector::All,
        locales: locales.clone(),
        separator: settings.separator,
    };

    let mut table = TranslationTable::new();
    for file in &files {
        table.merge(import_file(file, &filter)?);
    }

    let options = WriteOptions {
        separator: settings.separator,
        only_missing: settings.only_missing,
        include_bom: settings.include_bom,
    };

    // Serialize fully in memory; the output file appears only once the
    // whole run has succeeded.
    let mut buffer = Vec::new();
    let rows_written =
        write_table(&table, &locales, &options, &mut buffer).map_err(|source| {
            CatalogError::Write {
                path: settings.output.clone(),
                source,
            }
        })?;
    fs::write(&settings.output, buffer).map_err(|source| CatalogError::Write {
        path: settings.output.clone(),
        source,
    })?;

    Ok(ExportSummary {
        files_read: files.len(),
        rows_written,
        locales,
        output: settings.output.clone(),
    })
}

/// Deduplicated file list preserving first-seen order.
#[derive(Default)]
struct FileSet {
    files: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl FileSet {
    fn extend(&mut self, paths: Vec<PathBuf>) {
        for path in paths {
            if self.seen.insert(path.clone()) {
                self.files.push(path);
            }
        }
    }
}

fn collect_files(
    settings: &ExportSettings,
    domains: &Selector,
    registry: &dyn BundleRegistry,
    finder: &dyn FileFinder,
    reporter: &dyn Reporter,
) -> Result<Vec<PathBuf>> {
    let mut files = FileSet::default();

    for name in &settings.bundles {
        match name.as_str() {
            APP_BUNDLE => collect_app_scope(settings, domains, finder, &mut files)?,
            ALL_BUNDLES => {
                collect_app_scope(settings, domains, finder, &mut files)?;
                for bundle in registry.all() {
                    collect_bundle_scope(
                        bundle, settings, domains, registry, finder, reporter, &mut files,
                    )?;
                }
            }
            _ => {
                let bundle = registry
                    .resolve(name)
                    .ok_or_else(|| CatalogError::UnknownBundle { name: name.clone() })?;
                collect_bundle_scope(
                    bundle, settings, domains, registry, finder, reporter, &mut files,
                )?;
            }
        }
    }

    Ok(files.files)
}

fn collect_app_scope(
    settings: &ExportSettings,
    domains: &Selector,
    finder: &dyn FileFinder,
    files: &mut FileSet,
) -> Result<()> {
    files.extend(finder.app_files(&settings.locales, domains)?);
    files.extend(finder.app_files(&reference_selection(settings), domains)?);
    Ok(())
}

fn collect_bundle_scope(
    bundle: &BundleHandle,
    settings: &ExportSettings,
    domains: &Selector,
    registry: &dyn BundleRegistry,
    finder: &dyn FileFinder,
    reporter: &dyn Reporter,
    files: &mut FileSet,
) -> Result<()> {
    let bundle = resolve_parent_chain(bundle, registry, reporter)?;
    files.extend(finder.bundle_files(bundle, &settings.locales, domains)?);
    files.extend(finder.bundle_files(bundle, &reference_selection(settings), domains)?);
    Ok(())
}

/// The second finder pass guaranteeing the reference column is populated
/// even when the reference locale was not requested.
fn reference_selection(settings: &ExportSettings) -> LocaleSelection {
    LocaleSelection::List(vec![settings.reference_locale.clone()])
}

/// Follow declared parents to the topmost bundle, guarding against cycles.
fn resolve_parent_chain<'a>(
    mut bundle: &'a BundleHandle,
    registry: &'a dyn BundleRegistry,
    reporter: &dyn Reporter,
) -> Result<&'a BundleHandle> {
    let mut visited: HashSet<&str> = HashSet::from([bundle.name.as_str()]);

    while let Some(parent) = bundle.parent.as_deref() {
        if !visited.insert(parent) {
            return Err(CatalogError::ParentCycle {
                name: parent.to_string(),
            });
        }
        bundle = registry
            .resolve(parent)
            .ok_or_else(|| CatalogError::UnknownBundle {
                name: parent.to_string(),
            })?;
        reporter.report(&format!(
            "Using '{}' to look up translation files.",
            bundle.name
        ));
    }

    Ok(bundle)
}

/// Resolve the locale set: explicit lists pass through; `all` is inferred
/// from the discovered filenames, best-effort.
fn resolve_locales(selection: &LocaleSelection, files: &[PathBuf]) -> Vec<String> {
    match selection {
        LocaleSelection::List(locales) => locales.clone(),
        LocaleSelection::All => {
            let mut locales: Vec<String> = Vec::new();
            for file in files {
                let Some(file_name) = file.file_name().and_then(|name| name.to_str()) else {
                    continue;
                };
                let Some((_, locale)) = parse_sheet_name(file_name) else {
                    continue;
                };
                if !locales.iter().any(|seen| seen == locale) {
                    locales.push(locale.to_string());
                }
            }
            locales
        }
    }
}

/// Reference locale first, then the rest in their original order.
fn order_locales(reference: &str, resolved: Vec<String>) -> Vec<String> {
    let mut ordered = vec![reference.to_string()];
    ordered.extend(resolved.into_iter().filter(|locale| locale != reference));
    ordered
}
