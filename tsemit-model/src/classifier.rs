//! Classifiers: classes, interfaces and enumerations.

use serde::{Deserialize, Serialize};

use crate::{
    Classifier, Comment, NamedElement, Operation, Property, Type, ValueSpecification,
    VisibilityKind,
};

/// A specialization relationship pointing at the more general type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generalization {
    pub general: Type,
}

/// A realization relationship pointing at the implemented interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRealization {
    pub contract: Type,
}

/// A class in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    #[serde(default)]
    pub visibility: Option<VisibilityKind>,
    #[serde(default)]
    pub owned_comments: Vec<Comment>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub generalizations: Vec<Generalization>,
    #[serde(default)]
    pub interface_realizations: Vec<InterfaceRealization>,
    #[serde(default)]
    pub owned_attributes: Vec<Property>,
    #[serde(default)]
    pub owned_operations: Vec<Operation>,
}

impl Class {
    /// Create a new public class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Some(VisibilityKind::Public),
            owned_comments: Vec::new(),
            is_abstract: false,
            generalizations: Vec::new(),
            interface_realizations: Vec::new(),
            owned_attributes: Vec::new(),
            owned_operations: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, visibility: Option<VisibilityKind>) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn comment(mut self, body: impl Into<String>) -> Self {
        self.owned_comments.push(Comment::new(body));
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Add a superclass.
    pub fn extends(mut self, general: Type) -> Self {
        self.generalizations.push(Generalization { general });
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, contract: Type) -> Self {
        self.interface_realizations
            .push(InterfaceRealization { contract });
        self
    }

    /// Add an attribute. The attribute's owner is set to this class.
    pub fn attribute(mut self, property: Property) -> Self {
        self.owned_attributes
            .push(property.owner(crate::OwnerKind::Class));
        self
    }

    /// Add an operation. The operation's owner is set to this class.
    pub fn operation(mut self, operation: Operation) -> Self {
        self.owned_operations
            .push(operation.owner(crate::OwnerKind::Class));
        self
    }
}

impl NamedElement for Class {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Option<VisibilityKind> {
        self.visibility
    }

    fn owned_comments(&self) -> &[Comment] {
        &self.owned_comments
    }
}

impl Classifier for Class {
    fn generalizations(&self) -> &[Generalization] {
        &self.generalizations
    }
}

/// An interface in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub visibility: Option<VisibilityKind>,
    #[serde(default)]
    pub owned_comments: Vec<Comment>,
    #[serde(default)]
    pub generalizations: Vec<Generalization>,
    #[serde(default)]
    pub owned_attributes: Vec<Property>,
    #[serde(default)]
    pub owned_operations: Vec<Operation>,
}

impl Interface {
    /// Create a new public interface.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Some(VisibilityKind::Public),
            owned_comments: Vec::new(),
            generalizations: Vec::new(),
            owned_attributes: Vec::new(),
            owned_operations: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, visibility: Option<VisibilityKind>) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn comment(mut self, body: impl Into<String>) -> Self {
        self.owned_comments.push(Comment::new(body));
        self
    }

    /// Add a super-interface.
    pub fn extends(mut self, general: Type) -> Self {
        self.generalizations.push(Generalization { general });
        self
    }

    /// Add an attribute. The attribute's owner is set to this interface.
    pub fn attribute(mut self, property: Property) -> Self {
        self.owned_attributes
            .push(property.owner(crate::OwnerKind::Interface));
        self
    }

    /// Add an operation. The operation's owner is set to this interface.
    pub fn operation(mut self, operation: Operation) -> Self {
        self.owned_operations
            .push(operation.owner(crate::OwnerKind::Interface));
        self
    }
}

impl NamedElement for Interface {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Option<VisibilityKind> {
        self.visibility
    }

    fn owned_comments(&self) -> &[Comment] {
        &self.owned_comments
    }
}

impl Classifier for Interface {
    fn generalizations(&self) -> &[Generalization] {
        &self.generalizations
    }
}

/// A literal of an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumerationLiteral {
    pub name: String,
    #[serde(default)]
    pub owned_comments: Vec<Comment>,
    #[serde(default)]
    pub specification: Option<ValueSpecification>,
}

impl EnumerationLiteral {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owned_comments: Vec::new(),
            specification: None,
        }
    }

    pub fn comment(mut self, body: impl Into<String>) -> Self {
        self.owned_comments.push(Comment::new(body));
        self
    }

    /// Set the literal's value.
    pub fn value(mut self, specification: ValueSpecification) -> Self {
        self.specification = Some(specification);
        self
    }
}

impl NamedElement for EnumerationLiteral {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Option<VisibilityKind> {
        None
    }

    fn owned_comments(&self) -> &[Comment] {
        &self.owned_comments
    }
}

/// An enumeration in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enumeration {
    pub name: String,
    #[serde(default)]
    pub visibility: Option<VisibilityKind>,
    #[serde(default)]
    pub owned_comments: Vec<Comment>,
    #[serde(default)]
    pub owned_literals: Vec<EnumerationLiteral>,
}

impl Enumeration {
    /// Create a new public enumeration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Some(VisibilityKind::Public),
            owned_comments: Vec::new(),
            owned_literals: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, visibility: Option<VisibilityKind>) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn comment(mut self, body: impl Into<String>) -> Self {
        self.owned_comments.push(Comment::new(body));
        self
    }

    pub fn literal(mut self, literal: EnumerationLiteral) -> Self {
        self.owned_literals.push(literal);
        self
    }

    /// Add multiple literals.
    pub fn literals(mut self, literals: impl IntoIterator<Item = EnumerationLiteral>) -> Self {
        self.owned_literals.extend(literals);
        self
    }
}

impl NamedElement for Enumeration {
    fn name(&self) -> &str {
        &self.name
    }

    fn visibility(&self) -> Option<VisibilityKind> {
        self.visibility
    }

    fn owned_comments(&self) -> &[Comment] {
        &self.owned_comments
    }
}
