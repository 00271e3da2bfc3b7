//! Language-specific abstractions.
//!
//! - [`TypeNameProvider`] - Naming strategy mapping model types to display names
//! - [`DefaultTypeNameProvider`] - Strategy that returns model names unchanged

mod naming;

pub use naming::{DefaultTypeNameProvider, TypeNameProvider};
