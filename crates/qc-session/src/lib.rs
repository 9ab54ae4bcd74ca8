//! Session core for the Quebrada Conectada learning journey.
//!
//! The crate owns everything that turns user gestures into state:
//!
//! - [`SessionController`]: the view state machine (welcome, main menu,
//!   module, evidence lab, certificate)
//! - [`ProgressTracker`]: the set of completed modules
//! - [`UnlockPolicy`]: gating for the evidence lab and the certificate
//! - [`EventLog`]: bounded, newest-first telemetry log
//! - [`Certificate`]: issued on each certificate view, exported through a
//!   [`CertificateExporter`]
//!
//! Rendering layers only ever see [`SessionSnapshot`] copies; the
//! controller is the single owner of the live state.

pub mod certificate;
pub mod config;
pub mod controller;
pub mod error;
pub mod event_log;
pub mod events;
pub mod host;
pub mod progress;
pub mod state;
pub mod unlock;

pub use certificate::{Certificate, CertificateExporter, VerificationId};
pub use config::SessionConfig;
pub use controller::SessionController;
pub use error::{ExportError, Result, SessionError};
pub use event_log::{DEFAULT_LOG_CAPACITY, EventLog, EventLogEntry, Payload};
pub use host::{ModuleHost, TelemetrySink};
pub use progress::ProgressTracker;
pub use state::{SessionSnapshot, SessionState, View};
pub use unlock::{LAB_UNLOCK_THRESHOLD, UnlockPolicy, Unlocks};
