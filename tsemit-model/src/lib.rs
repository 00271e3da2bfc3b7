//! Semantic model types for the tsemit code emitter.
//!
//! This crate describes the typed declarations (classes, interfaces,
//! enumerations, properties, operations and parameters) that the emitter
//! turns into source text. The types are plain data and serve as the single
//! source of truth for everything the definition builder reads.
//!
//! # Architecture
//!
//! ```text
//! model (this crate) → definition builder → definitions → writer → source text
//! ```
//!
//! The model types are designed to be:
//! - Language-agnostic (no TypeScript-specific naming)
//! - Serializable (every element derives `Serialize`/`Deserialize`)
//! - Queried through small traits ([`NamedElement`], [`TypedElement`],
//!   [`MultiplicityElement`], [`Classifier`]) rather than runtime type checks

mod classifier;
mod element;
mod feature;
mod types;

pub use classifier::{
    Class, Enumeration, EnumerationLiteral, Generalization, Interface, InterfaceRealization,
};
pub use element::{
    Classifier, Comment, MultiplicityElement, NamedElement, OwnerKind, TypedElement,
    VisibilityKind,
};
pub use feature::{Operation, Parameter, ParameterDirection, Property};
pub use types::{Multiplicity, PrimitiveKind, Type, ValueSpecification};
