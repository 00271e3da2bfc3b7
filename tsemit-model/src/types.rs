//! Type references, multiplicities and value specifications.

use serde::{Deserialize, Serialize};

/// Primitive types known to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Boolean,
    Integer,
    Real,
    String,
    Object,
}

impl PrimitiveKind {
    /// Get the model name of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Real => "Real",
            Self::String => "String",
            Self::Object => "Object",
        }
    }
}

/// A reference to a type in the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Primitive(PrimitiveKind),
    DataType(String),
    Class(String),
    Interface(String),
    Enumeration(String),
}

impl Type {
    /// Create a class type reference.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// Create an interface type reference.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::Interface(name.into())
    }

    /// Create an enumeration type reference.
    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::Enumeration(name.into())
    }

    /// Create a data type reference.
    pub fn data_type(name: impl Into<String>) -> Self {
        Self::DataType(name.into())
    }

    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveKind::Boolean)
    }

    pub fn integer() -> Self {
        Self::Primitive(PrimitiveKind::Integer)
    }

    pub fn real() -> Self {
        Self::Primitive(PrimitiveKind::Real)
    }

    pub fn string() -> Self {
        Self::Primitive(PrimitiveKind::String)
    }

    pub fn object() -> Self {
        Self::Primitive(PrimitiveKind::Object)
    }

    /// Get the model name of the referenced type.
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(p) => p.as_str(),
            Self::DataType(name)
            | Self::Class(name)
            | Self::Interface(name)
            | Self::Enumeration(name) => name,
        }
    }

    /// Returns the primitive kind if this is a primitive type.
    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    /// Returns true for primitives and other data types.
    pub fn is_data_type(&self) -> bool {
        matches!(self, Self::Primitive(_) | Self::DataType(_))
    }
}

/// Lower and upper occurrence bounds of an element.
///
/// An upper bound of `None` means unbounded (`*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multiplicity {
    pub lower: u32,
    pub upper: Option<u32>,
}

impl Multiplicity {
    /// Exactly one (`1..1`).
    pub const ONE: Self = Self {
        lower: 1,
        upper: Some(1),
    };

    /// Zero or one (`0..1`).
    pub const OPTIONAL: Self = Self {
        lower: 0,
        upper: Some(1),
    };

    /// Zero or more (`0..*`).
    pub const MANY: Self = Self {
        lower: 0,
        upper: None,
    };

    /// One or more (`1..*`).
    pub const ONE_OR_MORE: Self = Self {
        lower: 1,
        upper: None,
    };

    pub fn new(lower: u32, upper: Option<u32>) -> Self {
        Self { lower, upper }
    }

    pub fn is_optional(&self) -> bool {
        self.lower == 0
    }

    pub fn is_multivalued(&self) -> bool {
        self.upper.is_none_or(|upper| upper > 1)
    }
}

impl Default for Multiplicity {
    fn default() -> Self {
        Self::ONE
    }
}

/// A literal or opaque value in the model, such as a default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSpecification {
    LiteralString(String),
    LiteralInteger(i64),
    LiteralReal(f64),
    LiteralBoolean(bool),
    LiteralNull,
    /// An expression kept as verbatim source text.
    Expression(String),
}

impl ValueSpecification {
    /// Get the value as text, without any quoting.
    pub fn string_value(&self) -> String {
        match self {
            Self::LiteralString(s) | Self::Expression(s) => s.clone(),
            Self::LiteralInteger(i) => i.to_string(),
            Self::LiteralReal(r) if r.is_infinite() => {
                if r.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string()
            }
            Self::LiteralReal(r) => r.to_string(),
            Self::LiteralBoolean(b) => b.to_string(),
            Self::LiteralNull => "null".to_string(),
        }
    }

    pub fn is_literal_string(&self) -> bool {
        matches!(self, Self::LiteralString(_))
    }

    pub fn is_literal_integer(&self) -> bool {
        matches!(self, Self::LiteralInteger(_))
    }
}
