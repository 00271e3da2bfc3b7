//! Feature flags and options for building and writing TypeScript definitions.
//!
//! Feature sets select which optional pieces of a definition the
//! [`DefinitionBuilder`](crate::DefinitionBuilder) computes. A feature set of
//! `None` in an options struct means "all features" for that construct.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tsemit_codegen::Indent;

bitflags! {
    /// How to mark elements that have a lower bound of 0.
    ///
    /// The empty set ([`OptionalityModifier::IGNORE`]) writes no modifier.
    /// Both flags may be set, in which case both markers are written.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct OptionalityModifier: u8 {
        /// Write a null union, for example `myProperty: string | null;`.
        const NULL_KEYWORD = 1 << 0;
        /// Write a question token, for example `myProperty?: string;`.
        const QUESTION_TOKEN = 1 << 1;
    }
}

impl OptionalityModifier {
    /// Don't write any modifier.
    pub const IGNORE: Self = Self::empty();

    /// Returns true if optional elements are written as a null union.
    pub fn uses_null(&self) -> bool {
        self.contains(Self::NULL_KEYWORD)
    }

    /// Returns true if optional elements are written with a question token.
    pub fn uses_question_token(&self) -> bool {
        self.contains(Self::QUESTION_TOKEN)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ClassFeatures: u8 {
        const JS_DOC_DESCRIPTION = 1 << 0;
        const GENERALIZATIONS = 1 << 1;
        const INTERFACE_REALIZATIONS = 1 << 2;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct InterfaceFeatures: u8 {
        const JS_DOC_DESCRIPTION = 1 << 0;
        const GENERALIZATIONS = 1 << 1;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct EnumFeatures: u8 {
        const JS_DOC_DESCRIPTION = 1 << 0;
        const INITIALIZERS = 1 << 1;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct PropertyFeatures: u8 {
        const JS_DOC_DESCRIPTION = 1 << 0;
        const ACCESS_MODIFIER = 1 << 1;
        const READONLY_MODIFIER = 1 << 2;
        const OPTIONAL_MODIFIER = 1 << 3;
        const INITIALIZER = 1 << 4;
        /// Write `!` after required properties that have no initializer, for
        /// properties that are assigned indirectly (e.g., by dependency injection).
        const DEFINITE_ASSIGNMENT_ASSERTION_MODIFIER = 1 << 5;
    }
}

impl PropertyFeatures {
    /// All features that apply to interface properties.
    pub const ALL_INTERFACE_PROPERTY: Self = Self::JS_DOC_DESCRIPTION
        .union(Self::READONLY_MODIFIER)
        .union(Self::OPTIONAL_MODIFIER);
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FunctionFeatures: u8 {
        const JS_DOC_DESCRIPTION = 1 << 0;
        const ACCESS_MODIFIER = 1 << 1;
        const OPTIONAL_MODIFIER = 1 << 2;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ParameterFeatures: u8 {
        const JS_DOC_DESCRIPTION = 1 << 0;
        const OPTIONAL_MODIFIER = 1 << 1;
    }
}

/// Options for building class definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassOptions {
    pub features: Option<ClassFeatures>,
    /// Additional interface names, written after the ones from the model.
    pub implements: Vec<String>,
    /// Additional superclass names, written after the ones from the model.
    pub inherits: Vec<String>,
    /// Defaults to true for public and package visibility.
    pub export: Option<bool>,
    pub declare: Option<bool>,
    /// Deprecated: use `export` or `declare` instead.
    pub prefix: Option<String>,
}

/// Options for building interface definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceOptions {
    pub features: Option<InterfaceFeatures>,
    /// Additional super-interface names, written after the ones from the model.
    pub inherits: Vec<String>,
    /// Defaults to true for public and package visibility.
    pub export: Option<bool>,
    pub declare: Option<bool>,
    /// Deprecated: use `export` or `declare` instead.
    pub prefix: Option<String>,
}

/// Options for building enum definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumOptions {
    pub features: Option<EnumFeatures>,
    /// Defaults to true for public and package visibility.
    pub export: Option<bool>,
    pub declare: Option<bool>,
    /// Write a `const enum`.
    #[serde(rename = "const")]
    pub const_: bool,
    /// Deprecated: use `export` or `declare` instead.
    pub prefix: Option<String>,
}

/// Options for building string literal types from enumerations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringLiteralOptions {
    /// Defaults to true for public and package visibility.
    pub export: Option<bool>,
    pub declare: Option<bool>,
}

/// Options for building property definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyOptions {
    /// Defaults to all features, or [`PropertyFeatures::ALL_INTERFACE_PROPERTY`]
    /// for properties owned by an interface.
    pub features: Option<PropertyFeatures>,
    /// Defaults to [`OptionalityModifier::QUESTION_TOKEN`].
    pub optionality: Option<OptionalityModifier>,
    /// Initialize array properties with `[]`, or with `null` when optional
    /// and written as a null union.
    pub initialize_array: bool,
    /// Initialize required primitive properties without a model default with
    /// `false`, `''` or `0`, and optional ones written as a null union with `null`.
    pub initialize_primitive_type: bool,
}

/// Options for building function definitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionOptions {
    pub features: Option<FunctionFeatures>,
    pub parameter_features: Option<ParameterFeatures>,
    /// Defaults to [`OptionalityModifier::QUESTION_TOKEN`].
    pub parameter_optionality: Option<OptionalityModifier>,
    /// Defaults to [`OptionalityModifier::NULL_KEYWORD`].
    pub return_optionality: Option<OptionalityModifier>,
    /// Write one parameter per line.
    pub multi_line_signature: bool,
}

/// Options for the writer itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Doc comment lines longer than this are word-wrapped. Zero disables wrapping.
    pub max_comment_width: usize,
    pub indent: Indent,
    /// Type name written for elements whose type cannot be resolved.
    pub fallback_type_name: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            max_comment_width: 100,
            indent: Indent::TYPESCRIPT,
            fallback_type_name: "any".to_string(),
        }
    }
}
