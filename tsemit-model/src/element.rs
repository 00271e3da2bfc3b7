//! Shared element traits and small value types.

use serde::{Deserialize, Serialize};

use crate::{Generalization, Multiplicity, Type};

/// Visibility of a model element.
///
/// An element without a visibility is represented as `None` wherever the
/// visibility is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityKind {
    Public,
    Private,
    Protected,
    Package,
}

impl VisibilityKind {
    /// Returns true for visibilities that are exported by default.
    pub fn is_exported_by_default(&self) -> bool {
        matches!(self, Self::Public | Self::Package)
    }
}

/// A documentation comment attached to an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
}

impl Comment {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// The kind of element that owns a feature (property or operation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    Class,
    Interface,
    DataType,
    #[default]
    None,
}

impl OwnerKind {
    /// Returns true if the owner is an interface-like container.
    pub fn is_interface(&self) -> bool {
        matches!(self, Self::Interface)
    }
}

/// An element with a name, a visibility and documentation comments.
pub trait NamedElement {
    fn name(&self) -> &str;

    fn visibility(&self) -> Option<VisibilityKind>;

    fn owned_comments(&self) -> &[Comment];
}

/// An element that references a type.
pub trait TypedElement: NamedElement {
    fn ty(&self) -> Option<&Type>;
}

/// An element with lower and upper occurrence bounds.
pub trait MultiplicityElement {
    fn multiplicity(&self) -> Multiplicity;

    /// Returns true if the element may be absent (lower bound of zero).
    fn is_optional(&self) -> bool {
        self.multiplicity().is_optional()
    }

    /// Returns true if the element represents a collection.
    fn is_multivalued(&self) -> bool {
        self.multiplicity().is_multivalued()
    }
}

/// A type that can specialize other types.
pub trait Classifier: NamedElement {
    fn generalizations(&self) -> &[Generalization];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_export_default() {
        assert!(VisibilityKind::Public.is_exported_by_default());
        assert!(VisibilityKind::Package.is_exported_by_default());
        assert!(!VisibilityKind::Private.is_exported_by_default());
        assert!(!VisibilityKind::Protected.is_exported_by_default());
    }

    #[test]
    fn test_owner_kind_is_interface() {
        assert!(OwnerKind::Interface.is_interface());
        assert!(!OwnerKind::Class.is_interface());
        assert!(!OwnerKind::default().is_interface());
    }
}
