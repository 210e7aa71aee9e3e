//! Report formatting and printing utilities.
//!
//! Command summaries are printed here, separate from the pipeline logic so
//! locsheet can be used as a library without printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ImportSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::export::ExportSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a command summary to stdout.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command summary to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Import(summary) => print_import(summary, writer),
        CommandSummary::Export(summary) => print_export(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_import<W: Write>(summary: &ImportSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Imported {} {} ({} {}) across {} {} from {}",
            summary.keys,
            pluralize(summary.keys, "key", "keys"),
            summary.values,
            pluralize(summary.values, "value", "values"),
            summary.bundles,
            pluralize(summary.bundles, "bundle", "bundles"),
            summary.file.display()
        )
        .green()
    );
    let _ = writeln!(writer, "  locales: {}", summary.locales.join(", ").cyan());
}

fn print_export<W: Write>(summary: &ExportSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} {} from {} {} to {}",
            summary.rows_written,
            pluralize(summary.rows_written, "row", "rows"),
            summary.files_read,
            pluralize(summary.files_read, "file", "files"),
            summary.output.display()
        )
        .green()
    );
    let _ = writeln!(writer, "  locales: {}", summary.locales.join(", ").cyan());
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn pluralize<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
