//! Exact combinatorial counting on unsigned 64-bit integers.
//!
//! Every function in this crate is total: there are no error values and no
//! panics. Results that do not fit in a [`Count`] wrap around modulo 2^64,
//! exactly like the `wrapping_*` operations on `u64`. Callers that need
//! overflow detection have to check the arguments themselves.
//!
//! The binomial style counts ([`c_count`], [`cr_count`] and [`pr_count`])
//! interleave multiplication and division so that intermediate values never
//! grow beyond the final result times the current factor.
//!
//! Forbid unsafe code in this crate.
#![forbid(unsafe_code)]

mod counting;
mod factorial;
mod macros;
mod product;

pub use counting::*;
pub use factorial::*;

/// The integer type used for all arguments and results.
pub type Count = u64;
