//! Error types for the cliffviz crate

use thiserror::Error;

/// Main error type for the cliffviz crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("required artifact '{filename}' was not found in the data directory")]
    MissingArtifact { filename: String },

    #[error("artifact '{filename}' is malformed: {reason}")]
    MalformedArtifact { filename: String, reason: String },

    #[error("unknown algorithm '{input}'. Expected one of: {expected}")]
    UnknownAlgorithm { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `MalformedArtifact` error for the given artifact file.
    pub fn malformed(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedArtifact {
            filename: filename.into(),
            reason: reason.into(),
        }
    }

    /// Build an `Io` error describing the failed operation.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
