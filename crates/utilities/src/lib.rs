//! Utility types and functions for the Tally workspace.
//!
//! Forbid unsafe code in this crate.
#![forbid(unsafe_code)]

mod debug_trace;
mod error;
mod test_logger;

pub use error::*;
pub use random_test::*;
pub use test_logger::*;

#[doc(hidden)]
pub use log as __log;
