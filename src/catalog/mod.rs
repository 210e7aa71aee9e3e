//! In-memory translation catalog model.
//!
//! - `table`: the bundle → domain → key → locale → value aggregation
//! - `selector`: bundle/domain filtering with an explicit "all" variant
//! - `escape`: the literal `\n` escape used by sheet cells

pub mod escape;
pub mod selector;
pub mod table;

pub use selector::{LocaleSelection, Selector};
pub use table::TranslationTable;
