use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for tsemit-typescript operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot build a {kind} definition without a name")]
    #[diagnostic(
        code(tsemit::missing_name),
        help("give the {kind} a non-empty name in the model")
    )]
    MissingName { kind: &'static str },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(tsemit::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse emitter configuration")]
    #[diagnostic(code(tsemit::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a missing name error for the given construct
    pub fn missing_name(kind: &'static str) -> Box<Self> {
        Box::new(Error::MissingName { kind })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
