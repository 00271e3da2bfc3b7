//! Loading emitter configuration from disk.

use std::fs;

use tempfile::TempDir;
use tsemit_model::{Class, Property, Type, VisibilityKind};
use tsemit_typescript::{
    ClassFeatures, EmitterConfig, Error, OptionalityModifier, PropertyFeatures,
};

#[test]
fn test_config_drives_writer_and_builder() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tsemit.toml");
    fs::write(
        &path,
        r#"
[writer]
indent = { spaces = 4 }

[class]
features = "JS_DOC_DESCRIPTION"
declare = true

[property]
features = "OPTIONAL_MODIFIER | ACCESS_MODIFIER"
optionality = "NULL_KEYWORD"
"#,
    )
    .unwrap();

    let config = EmitterConfig::from_file(&path).unwrap();
    assert_eq!(config.class.features, Some(ClassFeatures::JS_DOC_DESCRIPTION));
    assert_eq!(
        config.property.features,
        Some(PropertyFeatures::OPTIONAL_MODIFIER | PropertyFeatures::ACCESS_MODIFIER)
    );
    assert_eq!(config.property.optionality, Some(OptionalityModifier::NULL_KEYWORD));

    let class = Class::new("Cat")
        .with_visibility(Some(VisibilityKind::Public))
        .extends(Type::class("Animal"));
    let property = Property::new("owner", Type::class("Person"))
        .with_visibility(Some(VisibilityKind::Private))
        .optional();

    let mut writer = config.writer();
    writer
        .write_class(&class, vec![], &config.class, |w| {
            w.write_property(&property, vec![], &config.property)
                .unwrap();
        })
        .unwrap();

    assert_eq!(
        writer.as_str(),
        "export declare class Cat {\n    private owner: Person | null;\n}\n"
    );
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    let err = EmitterConfig::from_file(&path).unwrap_err();
    match *err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_invalid_file_reports_filename() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[property]\ninitialize_array = maybe\n").unwrap();

    let err = EmitterConfig::from_file(&path).unwrap_err();
    let Error::Parse { src, span, .. } = *err else {
        panic!("expected parse error");
    };
    assert!(span.is_some());
    assert!(src.name().ends_with("broken.toml"));
}
