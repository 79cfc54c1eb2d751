//! Error types for quicknote-core.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by host collaborators (storage, workspace, persistence).
#[derive(Debug, Error)]
pub enum HostError {
    /// Underlying I/O failure, with the on-disk path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file or folder already occupies the requested vault path.
    #[error("an entry already exists at '{path}'")]
    AlreadyExists { path: String },

    /// The requested vault path (or its parent) does not exist.
    #[error("no entry at '{path}'")]
    NotFound { path: String },

    /// The vault path is empty, absolute, or escapes the vault root.
    #[error("invalid vault path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// Settings blob could not be (de)serialized.
    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other host-defined failure.
    #[error("{0}")]
    Other(String),
}

impl HostError {
    /// Convenience constructor for [`HostError::Io`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HostError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a quick note could not be created.
#[derive(Debug, Error)]
pub enum CreateError {
    /// No target folder is configured.
    #[error("target folder is not set")]
    FolderUnset,

    /// A host collaborator failed somewhere in the creation sequence.
    #[error("host error: {0}")]
    Host(#[from] HostError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_includes_path() {
        let err = HostError::io(
            "/vault/Inbox/1.md",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(err.to_string().contains("/vault/Inbox/1.md"));
    }

    #[test]
    fn host_error_converts_into_create_error() {
        let err: CreateError = HostError::AlreadyExists {
            path: "Inbox/3.md".into(),
        }
        .into();
        assert!(matches!(err, CreateError::Host(HostError::AlreadyExists { .. })));
        assert!(err.to_string().contains("Inbox/3.md"));
    }
}
