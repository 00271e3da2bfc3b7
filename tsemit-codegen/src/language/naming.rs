//! Naming strategies for model types.

use tsemit_model::{Type, TypedElement};

/// Maps a model type, or the type of a typed element, to a display name.
///
/// Implement this trait to plug a target language's type names into the
/// definition builder.
pub trait TypeNameProvider {
    /// Get the display name for a type, or `None` if it has no name.
    fn type_name(&self, ty: &Type) -> Option<String>;

    /// Get the display name for the type of a typed element.
    ///
    /// Returns `None` for untyped elements.
    fn typed_element_type_name(&self, element: &dyn TypedElement) -> Option<String> {
        element.ty().and_then(|ty| self.type_name(ty))
    }
}

/// Naming strategy that returns the model name of every type.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeNameProvider;

impl TypeNameProvider for DefaultTypeNameProvider {
    fn type_name(&self, ty: &Type) -> Option<String> {
        let name = ty.name();
        (!name.is_empty()).then(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use tsemit_model::Property;

    use super::*;

    #[test]
    fn test_default_type_names() {
        let provider = DefaultTypeNameProvider;
        assert_eq!(provider.type_name(&Type::class("Animal")), Some("Animal".into()));
        assert_eq!(provider.type_name(&Type::string()), Some("String".into()));
        assert_eq!(provider.type_name(&Type::class("")), None);
    }

    #[test]
    fn test_typed_element_type_name() {
        let provider = DefaultTypeNameProvider;
        let typed = Property::new("owner", Type::class("Person"));
        let untyped = Property::new("anything", Type::object()).untyped();

        assert_eq!(provider.typed_element_type_name(&typed), Some("Person".into()));
        assert_eq!(provider.typed_element_type_name(&untyped), None);
    }
}
