//! Core utilities for the tsemit code emitter.
//!
//! This crate provides the string helpers shared by the emitter crates:
//! identifier casing, comment word wrapping and literal quoting.

mod utils;

// String utilities
pub use utils::{
    lower_first, quote_single, to_camel_case, to_pascal_case, upper_first, word_wrap,
};
