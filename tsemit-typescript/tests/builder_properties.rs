//! Property-based tests for optionality and default value resolution.

use proptest::prelude::*;
use tsemit_model::{
    Class, Multiplicity, Operation, OwnerKind, Parameter, Property, Type, ValueSpecification,
    VisibilityKind,
};
use tsemit_typescript::{
    ClassOptions, DefinitionBuilder, FunctionOptions, OptionalityModifier, PropertyOptions,
    TypeScriptWriter,
};

fn type_strategy() -> impl Strategy<Value = Type> {
    prop_oneof![
        Just(Type::boolean()),
        Just(Type::integer()),
        Just(Type::real()),
        Just(Type::string()),
        Just(Type::object()),
        "[A-Z][a-z]{1,8}".prop_map(Type::class),
        "[A-Z][a-z]{1,8}".prop_map(Type::enumeration),
    ]
}

fn multiplicity_strategy() -> impl Strategy<Value = Multiplicity> {
    prop_oneof![
        Just(Multiplicity::ONE),
        Just(Multiplicity::OPTIONAL),
        Just(Multiplicity::MANY),
        Just(Multiplicity::ONE_OR_MORE),
    ]
}

fn visibility_strategy() -> impl Strategy<Value = Option<VisibilityKind>> {
    prop::option::of(prop_oneof![
        Just(VisibilityKind::Public),
        Just(VisibilityKind::Private),
        Just(VisibilityKind::Protected),
        Just(VisibilityKind::Package),
    ])
}

fn default_value_strategy() -> impl Strategy<Value = Option<ValueSpecification>> {
    prop::option::of(prop_oneof![
        any::<i64>().prop_map(ValueSpecification::LiteralInteger),
        any::<bool>().prop_map(ValueSpecification::LiteralBoolean),
        "[a-z ]{0,8}".prop_map(ValueSpecification::LiteralString),
    ])
}

fn owner_strategy() -> impl Strategy<Value = OwnerKind> {
    prop_oneof![
        Just(OwnerKind::Class),
        Just(OwnerKind::Interface),
        Just(OwnerKind::None),
    ]
}

fn optionality_strategy() -> impl Strategy<Value = OptionalityModifier> {
    (0u8..4).prop_map(OptionalityModifier::from_bits_truncate)
}

prop_compose! {
    fn property_strategy()(
        name in "[a-z][a-zA-Z0-9]{0,10}",
        ty in type_strategy(),
        multiplicity in multiplicity_strategy(),
        visibility in visibility_strategy(),
        default_value in default_value_strategy(),
        owner in owner_strategy(),
        is_read_only in any::<bool>(),
        is_static in any::<bool>(),
        is_derived in any::<bool>(),
    ) -> Property {
        let mut property = Property::new(name, ty)
            .with_visibility(visibility)
            .with_multiplicity(multiplicity)
            .owner(owner);
        property.default_value = default_value;
        property.is_read_only = is_read_only;
        property.is_static = is_static;
        property.is_derived = is_derived;
        property
    }
}

prop_compose! {
    fn property_options_strategy()(
        optionality in prop::option::of(optionality_strategy()),
        initialize_array in any::<bool>(),
        initialize_primitive_type in any::<bool>(),
    ) -> PropertyOptions {
        PropertyOptions {
            features: None,
            optionality,
            initialize_array,
            initialize_primitive_type,
        }
    }
}

fn render_optional(property: &Property, optionality: OptionalityModifier) -> String {
    let mut property = property.clone();
    property.multiplicity = Multiplicity::OPTIONAL;
    let options = PropertyOptions {
        optionality: Some(optionality),
        ..Default::default()
    };

    let mut writer = TypeScriptWriter::new();
    writer.write_property(&property, vec![], &options).unwrap();
    writer.into_string()
}

proptest! {
    #[test]
    fn question_token_only_never_writes_null_union(property in property_strategy()) {
        let output = render_optional(&property, OptionalityModifier::QUESTION_TOKEN);
        let marker = format!("{}?:", property.name);
        prop_assert!(output.contains(&marker), "{}", output);
        prop_assert!(!output.contains("| null"), "{}", output);
    }

    #[test]
    fn null_keyword_only_never_writes_question_token(property in property_strategy()) {
        let output = render_optional(&property, OptionalityModifier::NULL_KEYWORD);
        let marker = format!("{}?", property.name);
        prop_assert!(output.contains("| null"), "{}", output);
        prop_assert!(!output.contains(&marker), "{}", output);
    }

    #[test]
    fn both_optionality_bits_write_both_markers(property in property_strategy()) {
        let both = OptionalityModifier::NULL_KEYWORD | OptionalityModifier::QUESTION_TOKEN;
        let output = render_optional(&property, both);
        let marker = format!("{}?:", property.name);
        prop_assert!(output.contains(&marker), "{}", output);
        prop_assert!(output.contains("| null"), "{}", output);
    }

    #[test]
    fn ignore_optionality_writes_no_marker(property in property_strategy()) {
        let output = render_optional(&property, OptionalityModifier::IGNORE);
        let marker = format!("{}?", property.name);
        prop_assert!(!output.contains(&marker), "{}", output);
        prop_assert!(!output.contains("| null"), "{}", output);
    }

    #[test]
    fn default_value_ignores_access_readonly_and_static(
        property in property_strategy(),
        options in property_options_strategy(),
        visibility in visibility_strategy(),
        is_read_only in any::<bool>(),
        is_static in any::<bool>(),
        is_derived in any::<bool>(),
    ) {
        let builder = DefinitionBuilder::typescript();
        let mut variant = property.clone();
        variant.visibility = visibility;
        variant.is_read_only = is_read_only;
        variant.is_static = is_static;
        variant.is_derived = is_derived;

        let base = builder.build_property_definition(&property, vec![], &options).unwrap();
        let changed = builder.build_property_definition(&variant, vec![], &options).unwrap();
        prop_assert_eq!(base.default_value, changed.default_value);
        prop_assert_eq!(
            base.use_definite_assignment_assertion_modifier,
            changed.use_definite_assignment_assertion_modifier
        );
    }

    #[test]
    fn definite_assignment_excludes_optional_and_default(
        property in property_strategy(),
        options in property_options_strategy(),
    ) {
        let builder = DefinitionBuilder::typescript();
        let definition = builder.build_property_definition(&property, vec![], &options).unwrap();

        if definition.use_definite_assignment_assertion_modifier {
            prop_assert!(!definition.is_optional);
            prop_assert!(definition.default_value.is_none());
            prop_assert!(!property.owner.is_interface());
        }
        if definition.use_question_token || definition.has_null_union_type {
            prop_assert!(definition.is_optional);
        }
    }

    #[test]
    fn interface_properties_have_no_access_modifier_or_initializer(
        property in property_strategy(),
        options in property_options_strategy(),
    ) {
        let property = property.owner(OwnerKind::Interface);
        let builder = DefinitionBuilder::typescript();
        let definition = builder.build_property_definition(&property, vec![], &options).unwrap();

        prop_assert_eq!(definition.access_modifier, None);
        prop_assert_eq!(definition.default_value, None);
        prop_assert!(!definition.use_definite_assignment_assertion_modifier);
    }

    #[test]
    fn property_definitions_are_idempotent(
        property in property_strategy(),
        options in property_options_strategy(),
    ) {
        let builder = DefinitionBuilder::typescript();
        let first = builder.build_property_definition(&property, vec![], &options).unwrap();
        let second = builder.build_property_definition(&property, vec![], &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn class_definitions_are_idempotent(
        name in "[A-Z][a-zA-Z]{0,10}",
        visibility in visibility_strategy(),
        is_abstract in any::<bool>(),
        generals in prop::collection::vec("[A-Z][a-z]{1,6}", 0..3),
        export in prop::option::of(any::<bool>()),
    ) {
        let mut class = Class::new(name).with_visibility(visibility);
        class.is_abstract = is_abstract;
        for general in generals {
            class = class.extends(Type::class(general));
        }
        let options = ClassOptions { export, ..Default::default() };

        let mut builder = DefinitionBuilder::typescript();
        let first = builder.build_class_definition(&class, vec![], &options).unwrap();
        let second = builder.build_class_definition(&class, vec![], &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn function_definitions_are_idempotent(
        name in "[a-z][a-zA-Z]{0,10}",
        parameters in prop::collection::vec(("[a-z]{1,6}", type_strategy(), multiplicity_strategy()), 0..4),
        return_type in prop::option::of(type_strategy()),
        optionality in prop::option::of(optionality_strategy()),
    ) {
        let mut operation = Operation::new(name);
        for (name, ty, multiplicity) in parameters {
            operation = operation.param(Parameter::new(name, ty).with_multiplicity(multiplicity));
        }
        if let Some(ty) = return_type {
            operation = operation.returns(ty);
        }
        let options = FunctionOptions {
            parameter_optionality: optionality,
            ..Default::default()
        };

        let builder = DefinitionBuilder::typescript();
        let first = builder.build_function_definition(&operation, &options).unwrap();
        let second = builder.build_function_definition(&operation, &options).unwrap();
        prop_assert_eq!(first, second);
    }
}
