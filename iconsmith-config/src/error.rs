use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(help("check that the file exists and is readable, or pass --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse iconsmith.toml")]
    #[diagnostic(code(iconsmith::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {field} '{value}'")]
    #[diagnostic(
        code(iconsmith::invalid_affix),
        help("{reason}. Use only ASCII letters, digits, '_' and '$'.")
    )]
    InvalidAffix {
        #[source_code]
        src: NamedSource<String>,
        #[label("not usable in a component name")]
        span: Option<SourceSpan>,
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create an invalid prefix/suffix error
    pub fn invalid_affix(
        field: &'static str,
        value: impl Into<String>,
        reason: &'static str,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidAffix {
            src: NamedSource::new(filename, src.to_string()),
            span,
            field,
            value: value.into(),
            reason,
        })
    }
}
