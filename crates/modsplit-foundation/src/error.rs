//! Error handling for modsplit

use crate::model::DefinitionKind;
use std::path::PathBuf;
use thiserror::Error;

/// Error type used throughout modsplit
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SplitError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Definition not found: {kind} `{name}`")]
    DefinitionNotFound { kind: DefinitionKind, name: String },

    #[error("Extraction truncated: {kind} `{name}` reaches end of input before its closing brace")]
    ExtractionTruncated { kind: DefinitionKind, name: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pattern: {message}")]
    Pattern { message: String },
}

impl SplitError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new not-found error for a named definition
    pub fn not_found(kind: DefinitionKind, name: impl Into<String>) -> Self {
        Self::DefinitionNotFound {
            kind,
            name: name.into(),
        }
    }

    /// Create a new truncated-extraction error for a named definition
    pub fn truncated(kind: DefinitionKind, name: impl Into<String>) -> Self {
        Self::ExtractionTruncated {
            kind,
            name: name.into(),
        }
    }

    /// Create a new I/O error bound to the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }

    /// Per-item misses that are reported but never abort a run
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DefinitionNotFound { .. } | Self::ExtractionTruncated { .. }
        )
    }
}

/// Result type alias for convenience
pub type SplitResult<T> = Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_variants() {
        assert!(SplitError::not_found(DefinitionKind::Function, "foo").is_recoverable());
        assert!(SplitError::truncated(DefinitionKind::Struct, "Foo").is_recoverable());
        assert!(!SplitError::config("missing").is_recoverable());
        assert!(!SplitError::io(
            "src/main.rs",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone")
        )
        .is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = SplitError::not_found(DefinitionKind::Function, "bar");
        assert_eq!(err.to_string(), "Definition not found: function `bar`");

        let err = SplitError::truncated(DefinitionKind::Struct, "Node");
        assert!(err.to_string().contains("struct `Node`"));

        let err = SplitError::io(
            "/tmp/out.rs",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("I/O error on /tmp/out.rs"));
    }
}
