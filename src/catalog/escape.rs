//! The literal `\n` escape used by sheet cells.
//!
//! Cells carry embedded newlines as the two-character sequence `\` + `n`.
//! Import rewrites the escape to a real newline before storage; export
//! always rewrites real newlines back to the escape, so a round trip is a
//! fixed point.

/// Rewrite literal `\n` sequences to real newlines (import direction).
pub fn unescape_newlines(cell: &str) -> String {
    cell.replace("\\n", "\n")
}

/// Rewrite real newlines to the literal `\n` escape (export direction).
pub fn escape_newlines(value: &str) -> String {
    value.replace('\n', "\\n")
}
