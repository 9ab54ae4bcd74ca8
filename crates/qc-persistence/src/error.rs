//! Persistence error types.
//!
//! Errors carry a user-facing message and an optional remediation hint so the
//! CLI can report them without exposing internals.

use std::path::PathBuf;
use thiserror::Error;

/// Preference storage error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preferences could not be encoded.
    #[error("Failed to serialize preferences")]
    Serialization {
        #[source]
        source: toml::ser::Error,
    },

    /// Stored blob exists but does not parse.
    #[error("Stored preferences are corrupt: {reason}")]
    PersistedPreferenceCorrupt { reason: String },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} the file at {}", operation, path.display()),
            Self::Serialization { .. } => {
                "An error occurred while saving the preferences.".to_string()
            }
            Self::PersistedPreferenceCorrupt { .. } => {
                "The saved preferences could not be read; defaults are in use.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the preferences to {}. Please check disk space and permissions.",
                target_path.display()
            ),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the config directory.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Serialization { .. } => None,
            Self::PersistedPreferenceCorrupt { .. } => {
                Some("Change any preference to overwrite the damaged file.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or pass --prefs with a writable path.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
