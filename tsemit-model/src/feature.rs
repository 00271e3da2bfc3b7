//! Structural and behavioral features: properties, operations and parameters.

use serde::{Deserialize, Serialize};

use crate::{
    Comment, Multiplicity, MultiplicityElement, NamedElement, OwnerKind, Type, TypedElement,
    ValueSpecification, VisibilityKind,
};

/// A property (attribute) of a class or interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub visibility: Option<VisibilityKind>,
    #[serde(default)]
    pub owned_comments: Vec<Comment>,
    #[serde(default, rename = "type")]
    pub ty: Option<Type>,
    #[serde(default)]
    pub multiplicity: Multiplicity,
    #[serde(default)]
    pub is_read_only: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_derived: bool,
    #[serde(default)]
    pub default_value: Option<ValueSpecification>,
    #[serde(default)]
    pub owner: OwnerKind,
}

impl Property {
    /// Create a new required property of the given type.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            visibility: None,
            owned_comments: Vec::new(),
            ty: Some(ty),
            multiplicity: Multiplicity::ONE,
            is_read_only: false,
            is_static: false,
            is_derived: false,
            default_value: None,
            owner: OwnerKind::None,
        }
    }

    /// Remove the type reference.
    pub fn untyped(mut self) -> Self {
        self.ty = None;
        self
    }

    pub fn with_visibility(mut self, visibility: Option<VisibilityKind>) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn comment(mut self, body: impl Into<String>) -> Self {
        self.owned_comments.push(Comment::new(body));
        self
    }

    pub fn with_multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    /// Make this property optional (`0..1`).
    pub fn optional(self) -> Self {
        self.with_multiplicity(Multiplicity::OPTIONAL)
    }

    /// Make this property a collection (`0..*`).
    pub fn many(self) -> Self {
        self.with_multiplicity(Multiplicity::MANY)
    }

    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn derived(mut self) -> Self {
        self.is_derived = true;
        self
    }

    pub fn default_value(mut self, value: ValueSpecification) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn owner(mut self, owner: OwnerKind) -> Self {
        self.owner = owner;
        self
    }
}

impl NamedElement for Property {
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

impl TypedElement for Property {
    fn ty(&self) -> Option<&Type> {
        self.ty.as_ref()
    }
}

impl MultiplicityElement for Property {
    fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }
}

/// Direction of an operation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterDirection {
    #[default]
    In,
    Out,
    InOut,
    Return,
}

/// A parameter of an operation, including the return parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Only meaningful for constructor parameters that become properties.
    #[serde(default)]
    pub visibility: Option<VisibilityKind>,
    #[serde(default)]
    pub owned_comments: Vec<Comment>,
    #[serde(default, rename = "type")]
    pub ty: Option<Type>,
    #[serde(default)]
    pub multiplicity: Multiplicity,
    #[serde(default)]
    pub direction: ParameterDirection,
}

impl Parameter {
    /// Create a new required input parameter.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            visibility: None,
            owned_comments: Vec::new(),
            ty: Some(ty),
            multiplicity: Multiplicity::ONE,
            direction: ParameterDirection::In,
        }
    }

    /// Create a return parameter of the given type.
    pub fn return_of(ty: Type) -> Self {
        Self::new("return", ty).direction(ParameterDirection::Return)
    }

    pub fn untyped(mut self) -> Self {
        self.ty = None;
        self
    }

    pub fn with_visibility(mut self, visibility: Option<VisibilityKind>) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn comment(mut self, body: impl Into<String>) -> Self {
        self.owned_comments.push(Comment::new(body));
        self
    }

    pub fn with_multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    pub fn optional(self) -> Self {
        self.with_multiplicity(Multiplicity::OPTIONAL)
    }

    pub fn many(self) -> Self {
        self.with_multiplicity(Multiplicity::MANY)
    }

    pub fn direction(mut self, direction: ParameterDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn is_return(&self) -> bool {
        self.direction == ParameterDirection::Return
    }
}

impl NamedElement for Parameter {
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

impl TypedElement for Parameter {
    fn ty(&self) -> Option<&Type> {
        self.ty.as_ref()
    }
}

impl MultiplicityElement for Parameter {
    fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }
}

/// An operation (method or constructor) of a class or interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub visibility: Option<VisibilityKind>,
    #[serde(default)]
    pub owned_comments: Vec<Comment>,
    #[serde(default)]
    pub owned_parameters: Vec<Parameter>,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_constructor: bool,
    #[serde(default)]
    pub owner: OwnerKind,
}

impl Operation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: None,
            owned_comments: Vec::new(),
            owned_parameters: Vec::new(),
            is_static: false,
            is_abstract: false,
            is_constructor: false,
            owner: OwnerKind::None,
        }
    }

    /// Create a constructor operation.
    pub fn constructor() -> Self {
        let mut op = Self::new("constructor");
        op.is_constructor = true;
        op
    }

    pub fn with_visibility(mut self, visibility: Option<VisibilityKind>) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn comment(mut self, body: impl Into<String>) -> Self {
        self.owned_comments.push(Comment::new(body));
        self
    }

    /// Add a parameter (of any direction).
    pub fn param(mut self, parameter: Parameter) -> Self {
        self.owned_parameters.push(parameter);
        self
    }

    /// Add a return parameter of the given type.
    pub fn returns(self, ty: Type) -> Self {
        self.param(Parameter::return_of(ty))
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn owner(mut self, owner: OwnerKind) -> Self {
        self.owner = owner;
        self
    }

    /// Get the first parameter with the `Return` direction.
    pub fn return_parameter(&self) -> Option<&Parameter> {
        self.owned_parameters.iter().find(|p| p.is_return())
    }
}

impl NamedElement for Operation {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_builder() {
        let property = Property::new("tags", Type::string())
            .many()
            .read_only()
            .with_visibility(Some(VisibilityKind::Private));

        assert!(property.is_optional());
        assert!(property.is_multivalued());
        assert!(property.is_read_only);
        assert_eq!(property.ty().map(Type::name), Some("String"));
    }

    #[test]
    fn test_return_parameter() {
        let op = Operation::new("getName")
            .param(Parameter::new("id", Type::integer()))
            .returns(Type::string());

        let ret = op.return_parameter().unwrap();
        assert!(ret.is_return());
        assert_eq!(ret.ty(), Some(&Type::string()));
        assert_eq!(op.owned_parameters.len(), 2);
    }

    #[test]
    fn test_constructor() {
        let op = Operation::constructor();
        assert!(op.is_constructor);
        assert!(op.return_parameter().is_none());
    }

    #[test]
    fn test_property_deserialize_defaults() {
        let property: Property =
            serde_json::from_str(r#"{ "name": "id", "type": { "primitive": "Integer" } }"#)
                .unwrap();
        assert_eq!(property.multiplicity, Multiplicity::ONE);
        assert_eq!(property.owner, OwnerKind::None);
        assert_eq!(property.ty, Some(Type::integer()));
    }
}
