//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! locsheet commands, using clap's derive API.
//!
//! ## Commands
//!
//! - `import`: Parse a delimited sheet into a translation table and report it
//! - `export`: Gather translation sheets across bundles into one output sheet
//! - `init`: Initialize a locsheet configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Import(cmd)) => cmd.args.common.verbose,
            Some(Command::Export(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Cell separator: TAB, or any single ASCII character (overrides config file)
    #[arg(long)]
    pub separator: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// Sheet file to import
    pub file: PathBuf,

    /// Locales to import, comma-separated (always explicit)
    #[arg(long, required = true, value_delimiter = ',')]
    pub locales: Vec<String>,

    /// Bundles to import, comma-separated ("all" disables filtering)
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub bundles: Vec<String>,

    /// Domains to import, comma-separated ("all" disables filtering)
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub domains: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    #[command(flatten)]
    pub args: ImportArgs,
}

#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Output sheet path
    pub output: PathBuf,

    /// Bundles to export, comma-separated ("app" for the application scope,
    /// "all" for everything)
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub bundles: Vec<String>,

    /// Domains to export, comma-separated ("all" disables filtering)
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub domains: Vec<String>,

    /// Locales to export, comma-separated ("all" infers them from the
    /// discovered file names)
    #[arg(long, value_delimiter = ',', default_value = "all")]
    pub locales: Vec<String>,

    /// Reference locale, always the first exported column (overrides config file)
    #[arg(long)]
    pub reference_locale: Option<String>,

    /// Export only rows missing a value for at least one locale
    #[arg(long)]
    pub only_missing: bool,

    /// Prefix the output with a UTF-8 byte-order mark
    #[arg(long)]
    pub bom: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub args: ExportArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import a delimited translation sheet and report its contents
    Import(ImportCommand),
    /// Export translation sheets from all configured bundles into one sheet
    Export(ExportCommand),
    /// Initialize a new .locsheetrc.json configuration file
    Init,
}
