//! The aggregated translation table.
//!
//! Bundle → domain → key → locale → value, with insertion order preserved at
//! every level. Export iterates this order verbatim, so it must reflect
//! first-seen order across all contributing sources, never a sort.

use indexmap::IndexMap;

/// Locale code → translated value for one key.
pub type LocaleValues = IndexMap<String, String>;
/// Key → locale values for one domain.
pub type KeyEntries = IndexMap<String, LocaleValues>;
/// Domain name → key entries for one bundle.
pub type DomainEntries = IndexMap<String, KeyEntries>;

/// In-memory aggregation of translations across bundles.
///
/// Created empty at the start of a pipeline run, populated row-by-row or
/// file-by-file, and discarded after serialization. Values are never empty
/// strings; an empty cell is simply absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    bundles: IndexMap<String, DomainEntries>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one value. First write wins: an existing value for the same
    /// bundle/domain/key/locale is kept. Empty values are refused so the
    /// "stored values are never empty" invariant holds at the model level.
    ///
    /// Returns true if the value was stored.
    pub fn insert(
        &mut self,
        bundle: &str,
        domain: &str,
        key: &str,
        locale: &str,
        value: &str,
    ) -> bool {
        if value.is_empty() {
            return false;
        }

        let entry = self
            .bundles
            .entry(bundle.to_string())
            .or_default()
            .entry(domain.to_string())
            .or_default()
            .entry(key.to_string())
            .or_default();

        if entry.contains_key(locale) {
            return false;
        }
        entry.insert(locale.to_string(), value.to_string());
        true
    }

    /// Fold another table into this one, first-write-wins per
    /// bundle/domain/key/locale.
    pub fn merge(&mut self, other: TranslationTable) {
        for (bundle, domains) in other.bundles {
            for (domain, keys) in domains {
                for (key, locales) in keys {
                    for (locale, value) in locales {
                        self.insert(&bundle, &domain, &key, &locale, &value);
                    }
                }
            }
        }
    }

    pub fn get(&self, bundle: &str, domain: &str, key: &str, locale: &str) -> Option<&str> {
        self.bundles
            .get(bundle)?
            .get(domain)?
            .get(key)?
            .get(locale)
            .map(String::as_str)
    }

    /// Bundles in first-seen order.
    pub fn bundles(&self) -> impl Iterator<Item = (&str, &DomainEntries)> {
        self.bundles.iter().map(|(name, domains)| (name.as_str(), domains))
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn bundle_count(&self) -> usize {
        self.bundles.len()
    }

    /// Total number of distinct bundle/domain/key rows.
    pub fn key_count(&self) -> usize {
        self.bundles
            .values()
            .flat_map(|domains| domains.values())
            .map(|keys| keys.len())
            .sum()
    }

    /// Total number of stored locale values.
    pub fn value_count(&self) -> usize {
        self.bundles
            .values()
            .flat_map(|domains| domains.values())
            .flat_map(|keys| keys.values())
            .map(|locales| locales.len())
            .sum()
    }
}
