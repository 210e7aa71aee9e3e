//! Bundle registry and translation sheet discovery.
//!
//! The export aggregator never touches the filesystem layout directly; it
//! goes through the [`BundleRegistry`] and [`FileFinder`] seams defined
//! here. The filesystem implementations are built from the project config.
//!
//! Sheet files are named `domain.locale.ext` (e.g. `messages.en.csv`); the
//! second dot-delimited segment is the locale the file is catalogued under.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::catalog::{LocaleSelection, Selector};
use crate::config::Config;
use crate::error::Result;

/// A registered bundle: a name, the directory holding its sheets, and an
/// optional declared parent that lookups delegate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleHandle {
    pub name: String,
    pub translations_dir: PathBuf,
    pub parent: Option<String>,
}

/// Resolves bundle names to handles.
pub trait BundleRegistry {
    fn resolve(&self, name: &str) -> Option<&BundleHandle>;
    /// Every registered bundle, in declaration order.
    fn all(&self) -> Vec<&BundleHandle>;
}

/// Enumerates translation sheet files for a scope.
pub trait FileFinder {
    /// Sheets belonging to the application itself (the `app` scope).
    fn app_files(&self, locales: &LocaleSelection, domains: &Selector) -> Result<Vec<PathBuf>>;

    /// Sheets belonging to one bundle.
    fn bundle_files(
        &self,
        bundle: &BundleHandle,
        locales: &LocaleSelection,
        domains: &Selector,
    ) -> Result<Vec<PathBuf>>;
}

/// Split a `domain.locale.ext` file name into domain and locale.
///
/// Returns `None` when the name has no locale segment (fewer than three
/// dot-delimited parts, or empty parts); such files are not catalog sheets.
pub fn parse_sheet_name(file_name: &str) -> Option<(&str, &str)> {
    let mut parts = file_name.split('.');
    let domain = parts.next()?;
    let locale = parts.next()?;
    parts.next()?;

    if domain.is_empty() || locale.is_empty() {
        return None;
    }
    Some((domain, locale))
}

/// Registry backed by the declarations in `.locsheetrc.json`.
#[derive(Debug)]
pub struct FsBundleRegistry {
    bundles: IndexMap<String, BundleHandle>,
}

impl FsBundleRegistry {
    /// Build the registry from config, resolving paths against `base`
    /// (normally the directory the config file was found in).
    pub fn from_config(config: &Config, base: &Path) -> Self {
        let bundles = config
            .bundles
            .iter()
            .map(|(name, bundle)| {
                let handle = BundleHandle {
                    name: name.clone(),
                    translations_dir: base.join(&bundle.path),
                    parent: bundle.parent.clone(),
                };
                (name.clone(), handle)
            })
            .collect();
        Self { bundles }
    }
}

impl BundleRegistry for FsBundleRegistry {
    fn resolve(&self, name: &str) -> Option<&BundleHandle> {
        self.bundles.get(name)
    }

    fn all(&self) -> Vec<&BundleHandle> {
        self.bundles.values().collect()
    }
}

/// Finder walking real translation directories.
#[derive(Debug)]
pub struct FsFileFinder {
    app_dir: PathBuf,
}

impl FsFileFinder {
    pub fn new(app_dir: PathBuf) -> Self {
        Self { app_dir }
    }
}

impl FileFinder for FsFileFinder {
    fn app_files(&self, locales: &LocaleSelection, domains: &Selector) -> Result<Vec<PathBuf>> {
        find_sheets(&self.app_dir, locales, domains)
    }

    fn bundle_files(
        &self,
        bundle: &BundleHandle,
        locales: &LocaleSelection,
        domains: &Selector,
    ) -> Result<Vec<PathBuf>> {
        find_sheets(&bundle.translations_dir, locales, domains)
    }
}

/// Walk one translations directory for matching sheets.
///
/// A missing directory yields an empty list (a scope may simply have no
/// translations). Results are sorted so discovery order does not depend on
/// the platform's directory iteration order.
fn find_sheets(dir: &Path, locales: &LocaleSelection, domains: &Selector) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        let Some((domain, locale)) = parse_sheet_name(file_name) else {
            continue;
        };
        if domains.matches(domain) && locales.matches(locale) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
