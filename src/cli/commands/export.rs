//! The `export` command: wire the filesystem collaborators and run the
//! aggregation pipeline.

use anyhow::Result;

use super::{CommandResult, CommandSummary, resolve_separator};
use crate::bundles::{FsBundleRegistry, FsFileFinder};
use crate::catalog::LocaleSelection;
use crate::cli::args::ExportCommand;
use crate::config::load_config;
use crate::export::ExportSettings;
use crate::reporter::{ConsoleReporter, Reporter, SilentReporter};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let cwd = std::env::current_dir()?;
    let loaded = load_config(&cwd)?;
    let separator = resolve_separator(&cmd.args.common, &loaded.config)?;

    let reference_locale = cmd
        .args
        .reference_locale
        .unwrap_or_else(|| loaded.config.reference_locale.clone());

    let settings = ExportSettings {
        bundles: cmd.args.bundles,
        domains: cmd.args.domains,
        locales: LocaleSelection::from_tokens(cmd.args.locales),
        reference_locale,
        separator,
        only_missing: cmd.args.only_missing,
        include_bom: cmd.args.bom,
        output: cmd.args.output,
    };

    let registry = FsBundleRegistry::from_config(&loaded.config, &loaded.base_dir);
    let finder = FsFileFinder::new(loaded.base_dir.join(&loaded.config.translations_root));

    let console = ConsoleReporter;
    let silent = SilentReporter;
    let reporter: &dyn Reporter = if cmd.args.common.verbose {
        &console
    } else {
        &silent
    };

    let summary = crate::export::export(&settings, &registry, &finder, reporter)?;

    Ok(CommandResult {
        summary: CommandSummary::Export(summary),
    })
}
