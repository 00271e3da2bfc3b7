//! Code emission building blocks.
//!
//! - [`CodeBuilder`] - Indentation-aware text sink
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
