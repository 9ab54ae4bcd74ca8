//! Session error types.
//!
//! Every error here is local and recoverable: the rejected operation leaves
//! the session exactly as it was and records no telemetry.

use qc_model::ModuleId;
use thiserror::Error;

/// Errors returned by session transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Selection or completion referenced a module outside the registry.
    #[error("module {0} is not in the registry")]
    InvalidModuleId(ModuleId),

    /// A gated view was requested before its unlock condition held.
    #[error("cannot open {view}: {reason}")]
    PreconditionFailed {
        /// Name of the view that was requested.
        view: &'static str,
        /// Why entry was refused.
        reason: String,
    },

    /// `start` was given a blank name.
    #[error("learner name must not be empty")]
    EmptyName,

    /// The operation needs a started session.
    #[error("session has not been started")]
    NotStarted,

    /// The certificate collaborator failed to produce its artifact.
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl SessionError {
    /// Get a user-friendly status message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidModuleId(id) => format!("Module {id} does not exist."),
            Self::PreconditionFailed { reason, .. } => format!("Locked: {reason}."),
            Self::EmptyName => "Please type your name to begin.".to_string(),
            Self::NotStarted => "Start the journey first.".to_string(),
            Self::Export(error) => format!("Could not generate the certificate: {}", error.message),
        }
    }
}

/// Failure reported by a [`crate::CertificateExporter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("certificate export failed: {message}")]
pub struct ExportError {
    pub message: String,
}

impl ExportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
