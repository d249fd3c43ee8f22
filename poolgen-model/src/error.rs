use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a reserved keyword error.
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate name error.
    pub fn duplicate_error(
        &self,
        name: impl Into<String>,
        kind: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Duplicate {
            src: self.named_source(),
            span,
            name: name.into(),
            kind: kind.into(),
        })
    }

    /// Create an unknown pool error.
    pub fn unknown_pool_error(
        &self,
        pool: impl Into<String>,
        component: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownPool {
            src: self.named_source(),
            span,
            pool: pool.into(),
            component: component.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse poolgen.toml")]
    #[diagnostic(code(poolgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(poolgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a reserved keyword")]
    #[diagnostic(
        code(poolgen::reserved_keyword),
        help("rename '{name}' to something else, e.g. '{name}Value'")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(poolgen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate {kind} '{name}'")]
    #[diagnostic(
        code(poolgen::duplicate_name),
        help("generated file names are derived from {kind} names and would collide")
    )]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared again here")]
        span: Option<SourceSpan>,
        name: String,
        kind: String,
    },

    #[error("component '{component}' refers to unknown pool '{pool}'")]
    #[diagnostic(
        code(poolgen::unknown_pool),
        help("declare '{pool}' in the top-level `pools` list")
    )]
    UnknownPool {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown pool")]
        span: Option<SourceSpan>,
        pool: String,
        component: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let ctx = SourceContext::new("[output]\n", "poolgen.toml");
        let err = ctx.validation_error("output directory must not be empty", None);
        assert_eq!(err.to_string(), "output directory must not be empty");
    }

    #[test]
    fn test_unknown_pool_message() {
        let ctx = SourceContext::new("", "poolgen.toml");
        let err = ctx.unknown_pool_error("Ghost", "Position", None);
        assert_eq!(
            err.to_string(),
            "component 'Position' refers to unknown pool 'Ghost'"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let ctx = SourceContext::new("", "poolgen.toml");
        let err = ctx.duplicate_error("Hero", "blueprint", None);
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("poolgen::duplicate_name")
        );
    }
}
