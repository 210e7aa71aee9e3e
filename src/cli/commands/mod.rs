pub mod export;
pub mod import;

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::args::CommonArgs;
use crate::config::{Config, parse_separator};
use crate::export::ExportSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Import(ImportSummary),
    Export(ExportSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ImportSummary {
    pub file: PathBuf,
    pub bundles: usize,
    pub keys: usize,
    pub values: usize,
    pub locales: Vec<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a locsheet command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

/// Command-line separator wins over the config file's.
pub(crate) fn resolve_separator(common: &CommonArgs, config: &Config) -> Result<u8> {
    match &common.separator {
        Some(value) => Ok(parse_separator(value)?),
        None => Ok(config.separator_byte()?),
    }
}
