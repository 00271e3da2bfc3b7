//! Fully resolved, serialization-ready definitions.
//!
//! A definition is plain data describing exactly what the
//! [`TypeScriptWriter`](crate::TypeScriptWriter) renders. Definitions are
//! produced by the [`DefinitionBuilder`](crate::DefinitionBuilder), or
//! constructed (and mutated) directly by callers. The writer never looks at
//! feature flags: everything it renders comes from the definition.

use std::{fmt, rc::Rc};

use serde::{Deserialize, Serialize};
use tsemit_core::quote_single;
use tsemit_model::VisibilityKind;

use crate::TypeScriptWriter;

/// A TypeScript access modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    Public,
    Private,
    Protected,
}

impl AccessModifier {
    /// Map a model visibility to an access modifier.
    ///
    /// Package visibility and absent visibility have no TypeScript modifier.
    pub fn from_visibility(visibility: Option<VisibilityKind>) -> Option<Self> {
        match visibility? {
            VisibilityKind::Public => Some(Self::Public),
            VisibilityKind::Private => Some(Self::Private),
            VisibilityKind::Protected => Some(Self::Protected),
            VisibilityKind::Package => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A callback that writes content through the writer.
#[derive(Clone)]
pub struct ContentWriter(Rc<dyn Fn(&mut TypeScriptWriter)>);

impl ContentWriter {
    pub fn new(f: impl Fn(&mut TypeScriptWriter) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn write(&self, writer: &mut TypeScriptWriter) {
        (self.0)(writer)
    }
}

impl fmt::Debug for ContentWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContentWriter(..)")
    }
}

impl PartialEq for ContentWriter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The argument list of a decorator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecoratorParameters {
    /// Literal argument text, written verbatim between the parentheses.
    Text(String),
    /// A callback writing the arguments.
    #[serde(skip)]
    Writer(ContentWriter),
}

/// A decorator such as `@Component({ ... })`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoratorDefinition {
    pub name: String,
    /// Write parentheses even without a parameter payload.
    #[serde(default)]
    pub has_parameters: bool,
    #[serde(default)]
    pub parameters: Option<DecoratorParameters>,
}

impl DecoratorDefinition {
    /// Create a bare decorator (`@Name`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_parameters: false,
            parameters: None,
        }
    }

    /// Write an empty argument list (`@Name()`).
    pub fn called(mut self) -> Self {
        self.has_parameters = true;
        self
    }

    /// Write literal arguments (`@Name(a, b)`).
    pub fn text(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = Some(DecoratorParameters::Text(parameters.into()));
        self
    }

    /// Write the arguments with a callback.
    pub fn writer(mut self, f: impl Fn(&mut TypeScriptWriter) + 'static) -> Self {
        self.parameters = Some(DecoratorParameters::Writer(ContentWriter::new(f)));
        self
    }

    /// Returns true if the decorator is written with parentheses.
    pub fn is_call(&self) -> bool {
        self.has_parameters || self.parameters.is_some()
    }
}

/// A class declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassDefinition {
    pub name: String,
    /// Doc comment paragraphs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    pub export: bool,
    pub declare: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<DecoratorDefinition>,
    pub is_abstract: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<String>,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// An interface declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    pub export: bool,
    pub declare: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
}

impl InterfaceDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// The initializer of an enum member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumMemberValue {
    Number(i64),
    String(String),
}

impl fmt::Display for EnumMemberValue {
    /// Numbers are written as-is, strings are quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => f.write_str(&quote_single(s)),
        }
    }
}

impl From<i64> for EnumMemberValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for EnumMemberValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumMemberValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// A member of an enum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumMemberDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    /// Zero and the empty string are present values.
    pub value: Option<EnumMemberValue>,
}

impl EnumMemberDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn value(mut self, value: impl Into<EnumMemberValue>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// An enum declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    pub export: bool,
    pub declare: bool,
    #[serde(rename = "const")]
    pub const_: bool,
    pub members: Vec<EnumMemberDefinition>,
}

impl EnumDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn member(mut self, member: EnumMemberDefinition) -> Self {
        self.members.push(member);
        self
    }
}

/// A string literal union type, e.g. `type Easing = 'in' | 'out';`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringLiteralTypeDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    pub export: bool,
    pub declare: bool,
    pub literals: Vec<String>,
}

/// A class or interface property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    /// The element type, without an array suffix.
    pub type_name: String,
    /// The writer appends `[]` to the type name.
    pub is_multivalued: bool,
    pub access_modifier: Option<AccessModifier>,
    pub is_readonly: bool,
    pub is_static: bool,
    pub is_optional: bool,
    /// Only written when `is_optional` is set.
    pub use_question_token: bool,
    /// Only written when `is_optional` is set.
    pub has_null_union_type: bool,
    /// Only written when the property is required and has no default value.
    pub use_definite_assignment_assertion_modifier: bool,
    /// Initializer text, already formatted (e.g., a quoted string).
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decorators: Vec<DecoratorDefinition>,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Default::default()
        }
    }
}

/// A function parameter, or the return pseudo-parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    pub type_name: String,
    pub is_multivalued: bool,
    pub is_optional: bool,
    /// Carries the return type's documentation; never written as a parameter.
    pub is_return: bool,
    pub use_question_token: bool,
    pub has_null_union_type: bool,
    /// Parameter property promotion; only written in constructors.
    pub access_modifier: Option<AccessModifier>,
    /// Write a `@param`/`@returns` tag even when the parameter has no description.
    pub include_in_js_doc: bool,
}

impl ParameterDefinition {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Default::default()
        }
    }
}

/// A function, method or constructor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionDefinition {
    /// Absent only for constructors.
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    pub access_modifier: Option<AccessModifier>,
    pub is_abstract: bool,
    pub is_static: bool,
    pub is_constructor: bool,
    /// Written as `void` when absent.
    pub return_type_name: Option<String>,
    pub returns_multivalued: bool,
    pub returns_optional: bool,
    /// Only written when `returns_optional` is set.
    pub return_uses_question_token: bool,
    /// Only written when `returns_optional` is set.
    pub return_has_null_union_type: bool,
    pub parameters: Vec<ParameterDefinition>,
    pub multi_line_signature: bool,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn constructor() -> Self {
        Self {
            is_constructor: true,
            ..Default::default()
        }
    }

    pub fn param(mut self, parameter: ParameterDefinition) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn returns(mut self, type_name: impl Into<String>) -> Self {
        self.return_type_name = Some(type_name.into());
        self
    }

    /// Parameters written in the signature (the return pseudo-parameter excluded).
    pub fn input_parameters(&self) -> impl Iterator<Item = &ParameterDefinition> {
        self.parameters.iter().filter(|p| !p.is_return)
    }
}

/// Keyword of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    #[default]
    Const,
    Let,
    Var,
}

impl VariableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::Let => "let",
            Self::Var => "var",
        }
    }
}

/// A variable declaration, e.g. `export const VERSION: string = '1.0';`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    pub export: bool,
    pub declare: bool,
    pub kind: VariableKind,
    pub type_name: Option<String>,
    pub initializer: Option<String>,
}

impl VariableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
