use tsemit_codegen::{DefaultTypeNameProvider, TypeNameProvider};
use tsemit_model::{PrimitiveKind, Type};

/// Naming strategy for TypeScript.
///
/// Model primitives map to their TypeScript counterparts; every other type
/// keeps its model name.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeNameProvider;

impl TypeNameProvider for TypeScriptTypeNameProvider {
    fn type_name(&self, ty: &Type) -> Option<String> {
        let name = match ty.as_primitive() {
            Some(PrimitiveKind::Boolean) => "boolean",
            Some(PrimitiveKind::Integer | PrimitiveKind::Real) => "number",
            Some(PrimitiveKind::String) => "string",
            Some(PrimitiveKind::Object) => "any",
            None => return DefaultTypeNameProvider.type_name(ty),
        };
        Some(name.to_string())
    }
}
