//! Emitter configuration loaded from TOML.
//!
//! ```toml
//! [writer]
//! max_comment_width = 80
//! indent = { spaces = 4 }
//!
//! [class]
//! features = "JS_DOC_DESCRIPTION | GENERALIZATIONS"
//! declare = true
//!
//! [property]
//! optionality = "NULL_KEYWORD"
//! initialize_array = true
//! ```

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result, TypeScriptWriter,
    options::{
        ClassOptions, EnumOptions, FunctionOptions, InterfaceOptions, PropertyOptions,
        WriterOptions,
    },
};

const DEFAULT_FILENAME: &str = "tsemit.toml";

/// Options for every construct, as one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitterConfig {
    pub writer: WriterOptions,
    pub class: ClassOptions,
    pub interface: InterfaceOptions,
    #[serde(rename = "enum")]
    pub enumeration: EnumOptions,
    pub property: PropertyOptions,
    pub function: FunctionOptions,
}

impl FromStr for EmitterConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_FILENAME)
    }
}

impl EmitterConfig {
    /// Load the configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse the configuration with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        tracing::debug!(filename, "loaded emitter configuration");
        Ok(config)
    }

    /// Create a writer configured with the writer options.
    pub fn writer(&self) -> TypeScriptWriter {
        TypeScriptWriter::with_options(&self.writer)
    }
}

#[cfg(test)]
mod tests {
    use tsemit_codegen::Indent;

    use super::*;
    use crate::options::{ClassFeatures, OptionalityModifier};

    #[test]
    fn test_empty_config_is_default() {
        let config: EmitterConfig = "".parse().unwrap();
        assert_eq!(config, EmitterConfig::default());
    }

    #[test]
    fn test_parse_options() {
        let config: EmitterConfig = r#"
[writer]
max_comment_width = 80
indent = "tab"

[class]
features = "JS_DOC_DESCRIPTION | GENERALIZATIONS"
implements = ["OnInit"]

[enum]
const = true

[property]
optionality = "NULL_KEYWORD | QUESTION_TOKEN"
"#
        .parse()
        .unwrap();

        assert_eq!(config.writer.max_comment_width, 80);
        assert_eq!(config.writer.indent, Indent::Tab);
        assert_eq!(config.writer.fallback_type_name, "any");
        assert_eq!(
            config.class.features,
            Some(ClassFeatures::JS_DOC_DESCRIPTION | ClassFeatures::GENERALIZATIONS)
        );
        assert_eq!(config.class.implements, vec!["OnInit"]);
        assert!(config.enumeration.const_);
        assert_eq!(
            config.property.optionality,
            Some(OptionalityModifier::NULL_KEYWORD | OptionalityModifier::QUESTION_TOKEN)
        );
    }

    #[test]
    fn test_parse_error() {
        let err = "[writer]\nmax_comment_width = \"wide\"\n"
            .parse::<EmitterConfig>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_section() {
        let err = "[klass]\nexport = true\n".parse::<EmitterConfig>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_writer_uses_indent() {
        let config: EmitterConfig = "[writer]\nindent = { spaces = 4 }\n".parse().unwrap();
        let mut writer = config.writer();
        writer.write_code_block(|w| {
            w.write_line("run();");
        });
        assert_eq!(writer.as_str(), "{\n    run();\n}\n");
    }
}
