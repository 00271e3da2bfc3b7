//! Resolution of model elements into definitions.
//!
//! The [`DefinitionBuilder`] is the single place where feature flags,
//! optionality conventions, visibility and default values are resolved. The
//! writer only renders what a definition carries.

use tsemit_codegen::{Diagnostic, TypeNameProvider};
use tsemit_core::quote_single;
use tsemit_model::{
    Class, Classifier, Comment, Enumeration, Interface, MultiplicityElement, Operation,
    Parameter, Property, Type, TypedElement, ValueSpecification, VisibilityKind,
};

use crate::{
    Error, Result, TypeScriptTypeNameProvider,
    definitions::{
        AccessModifier, ClassDefinition, DecoratorDefinition, EnumDefinition,
        EnumMemberDefinition, EnumMemberValue, FunctionDefinition, InterfaceDefinition,
        ParameterDefinition, PropertyDefinition, StringLiteralTypeDefinition,
    },
    options::{
        ClassFeatures, ClassOptions, EnumFeatures, EnumOptions, FunctionFeatures,
        FunctionOptions, InterfaceFeatures, InterfaceOptions, OptionalityModifier,
        ParameterFeatures, PropertyFeatures, PropertyOptions, StringLiteralOptions,
    },
    type_utility,
};

const EXPORT_KEYWORD: &str = "export";
const DECLARE_KEYWORD: &str = "declare";

/// Inputs to [`DefinitionBuilder::default_value_string`].
///
/// Only multiplicity, optionality and type name take part in default value
/// synthesis; access modifiers and readonly never do.
#[derive(Debug, Clone, Copy)]
pub struct DefaultValueRequest<'a> {
    /// The resolved element type name, without an array suffix.
    pub type_name: &'a str,
    pub is_multivalued: bool,
    /// Whether the element is rendered as optional (after feature gating).
    pub is_optional: bool,
    pub optionality: OptionalityModifier,
    /// The default value declared in the model.
    pub default_value: Option<&'a ValueSpecification>,
    pub initialize_primitive_type: bool,
    pub initialize_array: bool,
}

/// Export and declare qualifiers after the deprecated prefix was migrated.
#[derive(Debug, Clone, Copy)]
struct Qualifiers {
    export: Option<bool>,
    declare: Option<bool>,
}

/// Builds [definitions](crate::definitions) from model elements.
///
/// Warnings (such as use of the deprecated `prefix` option) are collected and
/// can be drained with [`DefinitionBuilder::take_diagnostics`].
pub struct DefinitionBuilder {
    type_names: Box<dyn TypeNameProvider>,
    fallback_type_name: String,
    diagnostics: Vec<Diagnostic>,
}

impl std::fmt::Debug for DefinitionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefinitionBuilder")
            .field("fallback_type_name", &self.fallback_type_name)
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

impl Default for DefinitionBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

impl DefinitionBuilder {
    /// Create a builder with a custom naming strategy.
    pub fn new(type_names: impl TypeNameProvider + 'static) -> Self {
        Self {
            type_names: Box::new(type_names),
            fallback_type_name: "any".to_string(),
            diagnostics: Vec::new(),
        }
    }

    /// Create a builder that uses TypeScript type names.
    pub fn typescript() -> Self {
        Self::new(TypeScriptTypeNameProvider)
    }

    /// Set the type name used for elements whose type can't be resolved.
    pub fn with_fallback_type_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_type_name = name.into();
        self
    }

    pub fn type_name_provider(&self) -> &dyn TypeNameProvider {
        self.type_names.as_ref()
    }

    pub fn fallback_type_name(&self) -> &str {
        &self.fallback_type_name
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn build_class_definition(
        &mut self,
        class: &Class,
        decorators: Vec<DecoratorDefinition>,
        options: &ClassOptions,
    ) -> Result<ClassDefinition> {
        let name = required_name(&class.name, "class")?;
        let qualifiers = self.migrate_prefix(
            &class.name,
            options.prefix.as_deref(),
            options.export,
            options.declare,
        );
        let features = options.features.unwrap_or(ClassFeatures::all());

        let description = if features.contains(ClassFeatures::JS_DOC_DESCRIPTION) {
            comment_bodies(&class.owned_comments)
        } else {
            Vec::new()
        };
        let extends = if features.contains(ClassFeatures::GENERALIZATIONS) {
            self.extends_names(class, &options.inherits)
        } else {
            Vec::new()
        };
        let implements = if features.contains(ClassFeatures::INTERFACE_REALIZATIONS) {
            let contracts = class.interface_realizations.iter().map(|r| &r.contract);
            self.type_names_with(contracts, &options.implements)
        } else {
            Vec::new()
        };

        tracing::debug!(class = %name, "built class definition");
        Ok(ClassDefinition {
            name,
            description,
            export: resolve_export(qualifiers.export, class.visibility),
            declare: qualifiers.declare.unwrap_or(false),
            decorators,
            is_abstract: class.is_abstract,
            extends,
            implements,
        })
    }

    pub fn build_interface_definition(
        &mut self,
        interface: &Interface,
        options: &InterfaceOptions,
    ) -> Result<InterfaceDefinition> {
        let name = required_name(&interface.name, "interface")?;
        let qualifiers = self.migrate_prefix(
            &interface.name,
            options.prefix.as_deref(),
            options.export,
            options.declare,
        );
        let features = options.features.unwrap_or(InterfaceFeatures::all());

        let description = if features.contains(InterfaceFeatures::JS_DOC_DESCRIPTION) {
            comment_bodies(&interface.owned_comments)
        } else {
            Vec::new()
        };
        let extends = if features.contains(InterfaceFeatures::GENERALIZATIONS) {
            self.extends_names(interface, &options.inherits)
        } else {
            Vec::new()
        };

        tracing::debug!(interface = %name, "built interface definition");
        Ok(InterfaceDefinition {
            name,
            description,
            export: resolve_export(qualifiers.export, interface.visibility),
            declare: qualifiers.declare.unwrap_or(false),
            extends,
        })
    }

    pub fn build_enum_definition(
        &mut self,
        enumeration: &Enumeration,
        options: &EnumOptions,
    ) -> Result<EnumDefinition> {
        let name = required_name(&enumeration.name, "enum")?;
        let qualifiers = self.migrate_prefix(
            &enumeration.name,
            options.prefix.as_deref(),
            options.export,
            options.declare,
        );
        let features = options.features.unwrap_or(EnumFeatures::all());
        let with_docs = features.contains(EnumFeatures::JS_DOC_DESCRIPTION);
        let with_initializers = features.contains(EnumFeatures::INITIALIZERS);

        let enum_description = if with_docs {
            comment_bodies(&enumeration.owned_comments)
        } else {
            Vec::new()
        };

        let mut members = Vec::with_capacity(enumeration.owned_literals.len());
        for literal in &enumeration.owned_literals {
            let value = match &literal.specification {
                Some(ValueSpecification::LiteralInteger(n)) if with_initializers => {
                    Some(EnumMemberValue::Number(*n))
                }
                Some(spec) if with_initializers => Some(EnumMemberValue::String(spec.string_value())),
                _ => None,
            };
            members.push(EnumMemberDefinition {
                name: required_name(&literal.name, "enum member")?,
                description: if with_docs {
                    comment_bodies(&literal.owned_comments)
                } else {
                    Vec::new()
                },
                value,
            });
        }

        tracing::debug!(enumeration = %name, members = members.len(), "built enum definition");
        Ok(EnumDefinition {
            name,
            description: enum_description,
            export: resolve_export(qualifiers.export, enumeration.visibility),
            declare: qualifiers.declare.unwrap_or(false),
            const_: options.const_,
            members,
        })
    }

    /// Build a string literal union type from the literal names of an enumeration.
    pub fn build_string_literal_type_definition(
        &self,
        enumeration: &Enumeration,
        options: &StringLiteralOptions,
    ) -> Result<StringLiteralTypeDefinition> {
        let name = required_name(&enumeration.name, "string literal type")?;
        let literals = enumeration
            .owned_literals
            .iter()
            .map(|literal| literal.name.clone())
            .collect();

        tracing::debug!(type_alias = %name, "built string literal type definition");
        Ok(StringLiteralTypeDefinition {
            name,
            description: comment_bodies(&enumeration.owned_comments),
            export: resolve_export(options.export, enumeration.visibility),
            declare: options.declare.unwrap_or(false),
            literals,
        })
    }

    pub fn build_property_definition(
        &self,
        property: &Property,
        decorators: Vec<DecoratorDefinition>,
        options: &PropertyOptions,
    ) -> Result<PropertyDefinition> {
        let name = required_name(&property.name, "property")?;
        let owned_by_interface = property.owner.is_interface();
        let features = options.features.unwrap_or(if owned_by_interface {
            PropertyFeatures::ALL_INTERFACE_PROPERTY
        } else {
            PropertyFeatures::all()
        });
        let optionality = options
            .optionality
            .unwrap_or(OptionalityModifier::QUESTION_TOKEN);

        let type_name = self.resolved_type_name(property);
        let is_multivalued = property.is_multivalued();
        let is_optional =
            property.is_optional() && features.contains(PropertyFeatures::OPTIONAL_MODIFIER);

        let default_value =
            if features.contains(PropertyFeatures::INITIALIZER) && !owned_by_interface {
                Self::default_value_string(&DefaultValueRequest {
                    type_name: &type_name,
                    is_multivalued,
                    is_optional,
                    optionality,
                    default_value: property.default_value.as_ref(),
                    initialize_primitive_type: options.initialize_primitive_type,
                    initialize_array: options.initialize_array,
                })
            } else {
                None
            };

        let access_modifier =
            if features.contains(PropertyFeatures::ACCESS_MODIFIER) && !owned_by_interface {
                AccessModifier::from_visibility(property.visibility)
            } else {
                None
            };

        // Derived properties are always readonly.
        let is_readonly = (features.contains(PropertyFeatures::READONLY_MODIFIER)
            && property.is_read_only)
            || property.is_derived;

        let use_definite_assignment_assertion_modifier = !is_optional
            && default_value.is_none()
            && !owned_by_interface
            && features.contains(PropertyFeatures::DEFINITE_ASSIGNMENT_ASSERTION_MODIFIER);

        let description = if features.contains(PropertyFeatures::JS_DOC_DESCRIPTION) {
            comment_bodies(&property.owned_comments)
        } else {
            Vec::new()
        };

        tracing::debug!(property = %name, type_name = %type_name, "built property definition");
        Ok(PropertyDefinition {
            name,
            description,
            type_name,
            is_multivalued,
            access_modifier,
            is_readonly,
            is_static: property.is_static,
            is_optional,
            use_question_token: is_optional && optionality.uses_question_token(),
            has_null_union_type: is_optional && optionality.uses_null(),
            use_definite_assignment_assertion_modifier,
            default_value,
            decorators,
        })
    }

    pub fn build_function_definition(
        &self,
        operation: &Operation,
        options: &FunctionOptions,
    ) -> Result<FunctionDefinition> {
        let name = if operation.is_constructor {
            None
        } else {
            Some(required_name(&operation.name, "function")?)
        };
        let owned_by_interface = operation.owner.is_interface();
        let features = options.features.unwrap_or(FunctionFeatures::all());
        let parameter_features = options
            .parameter_features
            .unwrap_or(ParameterFeatures::all());
        let parameter_optionality = options
            .parameter_optionality
            .unwrap_or(OptionalityModifier::QUESTION_TOKEN);
        let return_optionality = options
            .return_optionality
            .unwrap_or(OptionalityModifier::NULL_KEYWORD);

        let description = if features.contains(FunctionFeatures::JS_DOC_DESCRIPTION) {
            comment_bodies(&operation.owned_comments)
        } else {
            Vec::new()
        };

        let access_modifier =
            if features.contains(FunctionFeatures::ACCESS_MODIFIER) && !owned_by_interface {
                AccessModifier::from_visibility(operation.visibility)
            } else {
                None
            };

        let mut definition = FunctionDefinition {
            name,
            description,
            access_modifier,
            is_abstract: operation.is_abstract && !operation.is_constructor && !owned_by_interface,
            is_static: operation.is_static,
            is_constructor: operation.is_constructor,
            multi_line_signature: options.multi_line_signature,
            ..Default::default()
        };

        // Constructors have no return type.
        if let Some(ret) = operation.return_parameter().filter(|_| !operation.is_constructor) {
            let returns_optional =
                ret.is_optional() && features.contains(FunctionFeatures::OPTIONAL_MODIFIER);
            definition.return_type_name = Some(self.resolved_type_name(ret));
            definition.returns_multivalued = ret.is_multivalued();
            definition.returns_optional = returns_optional;
            definition.return_uses_question_token =
                returns_optional && return_optionality.uses_question_token();
            definition.return_has_null_union_type =
                returns_optional && return_optionality.uses_null();
        }

        for parameter in &operation.owned_parameters {
            definition.parameters.push(self.build_parameter_definition(
                parameter,
                operation.is_constructor,
                parameter_features,
                parameter_optionality,
            )?);
        }

        tracing::debug!(
            function = definition.name.as_deref().unwrap_or("constructor"),
            parameters = definition.parameters.len(),
            "built function definition"
        );
        Ok(definition)
    }

    fn build_parameter_definition(
        &self,
        parameter: &Parameter,
        in_constructor: bool,
        features: ParameterFeatures,
        optionality: OptionalityModifier,
    ) -> Result<ParameterDefinition> {
        let is_optional =
            parameter.is_optional() && features.contains(ParameterFeatures::OPTIONAL_MODIFIER);

        let with_docs = features.contains(ParameterFeatures::JS_DOC_DESCRIPTION);

        Ok(ParameterDefinition {
            name: required_name(&parameter.name, "parameter")?,
            description: if with_docs {
                comment_bodies(&parameter.owned_comments)
            } else {
                Vec::new()
            },
            type_name: self.resolved_type_name(parameter),
            is_multivalued: parameter.is_multivalued(),
            is_optional,
            is_return: parameter.is_return(),
            use_question_token: is_optional && optionality.uses_question_token(),
            has_null_union_type: is_optional && optionality.uses_null(),
            access_modifier: if in_constructor {
                AccessModifier::from_visibility(parameter.visibility)
            } else {
                None
            },
            include_in_js_doc: with_docs,
        })
    }

    /// Synthesize the initializer text of an element, if it gets one.
    ///
    /// - Multi-valued elements get `[]` when array initialization is requested,
    ///   or the null sentinel (if the optionality uses null) when optional.
    /// - Primitives render their model default, quoting string literals. Without
    ///   a model default and with primitive initialization requested, optional
    ///   primitives get the null sentinel and required ones their zero value.
    /// - Complex types only get `null`, when optional and written as a null union.
    pub fn default_value_string(request: &DefaultValueRequest<'_>) -> Option<String> {
        let value_if_optional = request.optionality.uses_null().then(|| "null".to_string());

        if request.is_multivalued {
            if !request.initialize_array {
                return None;
            }
            return if request.is_optional {
                value_if_optional
            } else {
                Some("[]".to_string())
            };
        }

        if type_utility::is_primitive_type(request.type_name) {
            if let Some(value) = request.default_value {
                return Some(match value {
                    ValueSpecification::LiteralString(s) => quote_single(s),
                    other => other.string_value(),
                });
            }
            if !request.initialize_primitive_type {
                return None;
            }
            if request.is_optional {
                return value_if_optional;
            }
            return type_utility::primitive_default(request.type_name).map(str::to_string);
        }

        if request.is_optional {
            value_if_optional
        } else {
            None
        }
    }

    /// Type name of a typed element, falling back to the configured default.
    fn resolved_type_name(&self, element: &dyn TypedElement) -> String {
        self.type_names
            .typed_element_type_name(element)
            .unwrap_or_else(|| self.fallback_type_name.clone())
    }

    fn type_name_of(&self, ty: &Type) -> String {
        self.type_names
            .type_name(ty)
            .unwrap_or_else(|| ty.name().to_string())
    }

    fn extends_names(&self, classifier: &dyn Classifier, additional: &[String]) -> Vec<String> {
        let generals = classifier.generalizations().iter().map(|g| &g.general);
        self.type_names_with(generals, additional)
    }

    fn type_names_with<'a>(
        &self,
        types: impl Iterator<Item = &'a Type>,
        additional: &[String],
    ) -> Vec<String> {
        types
            .map(|ty| self.type_name_of(ty))
            .chain(additional.iter().cloned())
            .collect()
    }

    /// Map the deprecated free-text prefix onto the export and declare flags.
    fn migrate_prefix(
        &mut self,
        element: &str,
        prefix: Option<&str>,
        export: Option<bool>,
        declare: Option<bool>,
    ) -> Qualifiers {
        let mut qualifiers = Qualifiers { export, declare };
        let Some(prefix) = prefix.filter(|p| !p.is_empty()) else {
            return qualifiers;
        };

        tracing::warn!(element, prefix, "the 'prefix' option is deprecated");
        self.diagnostics.push(
            Diagnostic::warning(
                "the 'prefix' option is deprecated, use the 'export' or 'declare' option instead",
            )
            .at(element),
        );

        match prefix.trim() {
            EXPORT_KEYWORD => qualifiers.export = Some(true),
            DECLARE_KEYWORD => qualifiers.declare = Some(true),
            _ => {}
        }
        qualifiers
    }
}

fn required_name(name: &str, kind: &'static str) -> Result<String> {
    if name.is_empty() {
        return Err(Error::missing_name(kind));
    }
    Ok(name.to_string())
}

fn comment_bodies(comments: &[Comment]) -> Vec<String> {
    comments.iter().map(|c| c.body.clone()).collect()
}

fn resolve_export(export: Option<bool>, visibility: Option<VisibilityKind>) -> bool {
    export.unwrap_or_else(|| visibility.is_some_and(|v| v.is_exported_by_default()))
}
