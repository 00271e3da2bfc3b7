//! Definitions are plain data that serialize without any behavior attached.

use serde_json::json;
use tsemit_model::{Class, Property, Type, VisibilityKind};
use tsemit_typescript::{
    AccessModifier, ClassOptions, DecoratorDefinition, DefinitionBuilder, PropertyDefinition,
    PropertyOptions, TypeScriptWriter,
};

#[test]
fn test_class_definition_json() {
    let mut builder = DefinitionBuilder::typescript();
    let class = Class::new("Dog")
        .with_visibility(Some(VisibilityKind::Public))
        .comment("A dog.")
        .extends(Type::class("Animal"));
    let definition = builder
        .build_class_definition(
            &class,
            vec![DecoratorDefinition::new("Injectable").called()],
            &ClassOptions::default(),
        )
        .unwrap();

    assert_eq!(
        serde_json::to_value(&definition).unwrap(),
        json!({
            "name": "Dog",
            "description": ["A dog."],
            "export": true,
            "declare": false,
            "decorators": [
                { "name": "Injectable", "has_parameters": true, "parameters": null }
            ],
            "is_abstract": false,
            "extends": ["Animal"]
        })
    );
}

#[test]
fn test_edited_definition_renders_the_same_way() {
    let builder = DefinitionBuilder::typescript();
    let property = Property::new("id", Type::integer()).with_visibility(Some(VisibilityKind::Public));
    let definition = builder
        .build_property_definition(&property, vec![], &PropertyOptions::default())
        .unwrap();

    let json = serde_json::to_string(&definition).unwrap();
    let mut edited: PropertyDefinition = serde_json::from_str(&json).unwrap();
    assert_eq!(edited, definition);
    assert_eq!(edited.access_modifier, Some(AccessModifier::Public));

    edited.access_modifier = Some(AccessModifier::Protected);
    edited.is_readonly = true;

    let mut writer = TypeScriptWriter::new();
    writer.write_property_definition(&definition);
    writer.write_property_definition(&edited);
    assert_eq!(
        writer.as_str(),
        "public id!: number;\nprotected readonly id!: number;\n"
    );
}

#[test]
fn test_definitions_deserialize_with_defaults() {
    let definition: PropertyDefinition =
        serde_json::from_value(json!({ "name": "title", "type_name": "string" })).unwrap();

    let mut writer = TypeScriptWriter::new();
    writer.write_property_definition(&definition);
    assert_eq!(writer.as_str(), "title: string;\n");
}
