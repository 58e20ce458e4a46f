//! Parsing and evaluation of textual count queries for the Tally workspace.
//!
//! Forbid unsafe code in this crate.
#![forbid(unsafe_code)]

mod parse_numbers;
mod query;

pub use parse_numbers::*;
pub use query::*;
