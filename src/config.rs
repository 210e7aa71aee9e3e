use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::sheet::DEFAULT_SEPARATOR;

pub const CONFIG_FILE_NAME: &str = ".locsheetrc.json";

/// A bundle declaration: where its translation sheets live and, optionally,
/// which bundle it inherits translations from.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfig {
    pub path: String,
    #[serde(default)]
    pub parent: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the application-level translation sheets.
    #[serde(default = "default_translations_root")]
    pub translations_root: String,
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    /// Cell separator, one ASCII character. `"\t"` by default.
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub bundles: IndexMap<String, BundleConfig>,
}

fn default_translations_root() -> String {
    "./translations".to_string()
}

fn default_reference_locale() -> String {
    "en".to_string()
}

fn default_separator() -> String {
    (DEFAULT_SEPARATOR as char).to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations_root: default_translations_root(),
            reference_locale: default_reference_locale(),
            separator: default_separator(),
            bundles: IndexMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the separator is not a single ASCII character or
    /// if a bundle names an undeclared parent.
    pub fn validate(&self) -> Result<()> {
        self.separator_byte()?;

        for (name, bundle) in &self.bundles {
            if let Some(parent) = &bundle.parent {
                if !self.bundles.contains_key(parent) {
                    anyhow::bail!(
                        "Bundle \"{}\" declares unknown parent \"{}\"",
                        name,
                        parent
                    );
                }
            }
        }

        Ok(())
    }

    /// The configured separator as the single byte the sheet layer needs.
    pub fn separator_byte(&self) -> std::result::Result<u8, CatalogError> {
        parse_separator(&self.separator)
    }
}

/// Parse a separator spelled on the command line or in config.
///
/// Accepts `TAB`, `tab`, or the literal `\t` spelling for tab, otherwise
/// any single ASCII character.
pub fn parse_separator(value: &str) -> std::result::Result<u8, CatalogError> {
    match value {
        "TAB" | "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii() => Ok(ch as u8),
                _ => Err(CatalogError::InvalidSeparator {
                    value: value.to_string(),
                }),
            }
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory config paths resolve against (the config file's directory,
    /// or the start directory when using defaults).
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
