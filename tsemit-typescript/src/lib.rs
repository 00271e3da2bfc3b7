//! TypeScript code emission for the tsemit code emitter.
//!
//! Emission is a two-step pipeline:
//!
//! ```text
//! model element + options → DefinitionBuilder → definition → TypeScriptWriter → source text
//! ```
//!
//! The [`DefinitionBuilder`] resolves feature flags, optionality, visibility
//! and default values into plain [definitions](definitions). The
//! [`TypeScriptWriter`] renders definitions without looking at any options,
//! so a caller can build a definition, adjust it, and write it. The
//! `write_class`, `write_property` (and similar) methods compose both steps.
//!
//! # Example
//!
//! ```
//! use tsemit_model::{Class, Property, Type, VisibilityKind};
//! use tsemit_typescript::{ClassOptions, PropertyOptions, TypeScriptWriter};
//!
//! let class = Class::new("Animal").with_visibility(Some(VisibilityKind::Public));
//! let property = Property::new("name", Type::string()).optional();
//!
//! let mut writer = TypeScriptWriter::new();
//! writer
//!     .write_class(&class, vec![], &ClassOptions::default(), |w| {
//!         w.write_property(&property, vec![], &PropertyOptions::default())
//!             .unwrap();
//!     })
//!     .unwrap();
//!
//! assert_eq!(writer.as_str(), "export class Animal {\n  name?: string;\n}\n");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod definition_builder;
pub mod definitions;
mod error;
pub mod options;
mod type_name_provider;
pub mod type_utility;
mod writer;

pub use config::EmitterConfig;
pub use definition_builder::{DefaultValueRequest, DefinitionBuilder};
pub use definitions::{
    AccessModifier, ClassDefinition, ContentWriter, DecoratorDefinition, DecoratorParameters,
    EnumDefinition, EnumMemberDefinition, EnumMemberValue, FunctionDefinition,
    InterfaceDefinition, ParameterDefinition, PropertyDefinition, StringLiteralTypeDefinition,
    VariableDefinition, VariableKind,
};
pub use error::{Error, Result};
pub use options::{
    ClassFeatures, ClassOptions, EnumFeatures, EnumOptions, FunctionFeatures, FunctionOptions,
    InterfaceFeatures, InterfaceOptions, OptionalityModifier, ParameterFeatures,
    PropertyFeatures, PropertyOptions, StringLiteralOptions, WriterOptions,
};
pub use type_name_provider::TypeScriptTypeNameProvider;
pub use writer::{TypeScriptWriter, make_safe_module_name};
