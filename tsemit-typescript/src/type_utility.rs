//! Queries on TypeScript type names.

/// Returns true for the TypeScript primitives that get canonical default values.
pub fn is_primitive_type(type_name: &str) -> bool {
    matches!(type_name, "boolean" | "string" | "number")
}

/// Get the canonical zero value of a primitive type (`false`, `''` or `0`).
pub fn primitive_default(type_name: &str) -> Option<&'static str> {
    match type_name {
        "boolean" => Some("false"),
        "string" => Some("''"),
        "number" => Some("0"),
        _ => None,
    }
}
