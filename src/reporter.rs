//! Progress reporting seam.
//!
//! The export aggregator narrates noteworthy resolution steps (parent
//! bundle delegation, for one) through this trait. Reporting is
//! fire-and-forget; nothing downstream consumes a return value.

use colored::Colorize;

pub trait Reporter {
    fn report(&self, message: &str);
}

/// Prints progress lines to stdout, dimmed so they read as commentary
/// next to the command summary.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}

/// Discards every message. Used in tests and quiet pipelines.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _message: &str) {}
}
