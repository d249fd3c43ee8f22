use std::path::PathBuf;

use thiserror::Error;

/// Result type for generation runs.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Fatal errors of a generation run.
///
/// Cleanup failures are not represented here; they are reported as
/// [`Diagnostic`](crate::Diagnostic) warnings and never abort a run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("target directory must not be empty")]
    EmptyTargetDirectory,

    #[error("failed to create directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("generator '{generator}' failed")]
    Generator {
        generator: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl GenerateError {
    /// Wrap an error returned by a generator plugin.
    pub fn generator(generator: impl Into<String>, source: eyre::Report) -> Self {
        Self::Generator {
            generator: generator.into(),
            source: source.into(),
        }
    }
}
