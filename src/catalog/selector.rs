//! Bundle/domain selection for import filtering.
//!
//! Sheet tooling historically signals "no filtering" with a single-element
//! list containing the literal token `all`. That convention is kept at the
//! boundary (`from_tokens`) but represented internally as a tagged variant,
//! so membership checks never re-inspect the token list.

use std::collections::HashSet;

/// The reserved token meaning "no filtering" (matched case-sensitively).
pub const ALL_TOKEN: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every name matches.
    All,
    /// Only the named entries match.
    Subset(HashSet<String>),
}

impl Selector {
    /// Build a selector from a token list, honoring the `["all"]` sentinel.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if names.len() == 1 && names[0] == ALL_TOKEN {
            Selector::All
        } else {
            Selector::Subset(names.into_iter().collect())
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Subset(names) => names.contains(name),
        }
    }
}

/// Locale selection on the export side.
///
/// Unlike [`Selector`], order matters here: an explicit list fixes the
/// locale column order of the exported sheet (after the reference locale is
/// moved to the front). `All` defers to locale inference from discovered
/// filenames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleSelection {
    All,
    List(Vec<String>),
}

impl LocaleSelection {
    /// Build a selection from a token list, honoring the `["all"]` sentinel.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let locales: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if locales.len() == 1 && locales[0] == ALL_TOKEN {
            LocaleSelection::All
        } else {
            LocaleSelection::List(locales)
        }
    }

    pub fn matches(&self, locale: &str) -> bool {
        match self {
            LocaleSelection::All => true,
            LocaleSelection::List(locales) => locales.iter().any(|name| name == locale),
        }
    }
}
