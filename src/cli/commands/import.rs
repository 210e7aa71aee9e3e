//! The `import` command: parse one sheet into a translation table.
//!
//! The table itself is transient (nothing persists between runs); the
//! command's output is the summary of what the sheet contained after
//! filtering.

use anyhow::Result;

use super::{CommandResult, CommandSummary, ImportSummary, resolve_separator};
use crate::catalog::Selector;
use crate::cli::args::ImportCommand;
use crate::config::load_config;
use crate::import::{ImportFilter, import_file};

pub fn import(cmd: ImportCommand) -> Result<CommandResult> {
    let cwd = std::env::current_dir()?;
    let loaded = load_config(&cwd)?;
    let separator = resolve_separator(&cmd.args.common, &loaded.config)?;

    let filter = ImportFilter {
        bundles: Selector::from_tokens(cmd.args.bundles),
        domains: Selector::from_tokens(cmd.args.domains),
        locales: cmd.args.locales,
        separator,
    };

    let table = import_file(&cmd.args.file, &filter)?;

    Ok(CommandResult {
        summary: CommandSummary::Import(ImportSummary {
            file: cmd.args.file,
            bundles: table.bundle_count(),
            keys: table.key_count(),
            values: table.value_count(),
            locales: filter.locales,
        }),
    })
}
