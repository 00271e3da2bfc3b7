//! Shared code emission utilities for the tsemit code emitter.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific writers (e.g., `tsemit-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Output sink with indentation tracking ([`CodeBuilder`], [`Indent`])
//! - [`diagnostic`] - Warnings collected while building definitions
//! - [`language`] - Naming strategies that map model types to display names

pub mod builder;
pub mod diagnostic;
pub mod language;

pub use builder::{CodeBuilder, Indent};
pub use diagnostic::Diagnostic;
pub use language::{DefaultTypeNameProvider, TypeNameProvider};
