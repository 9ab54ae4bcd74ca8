//! The journey's view state machine.
//!
//! ```text
//! Welcome --start--> Main <--go_back-- Module(id) / EvidenceLab / Certificate
//!                     |--select_module--> Module(id)
//!                     |--open_evidence_lab--> EvidenceLab   (lab unlocked)
//!                     `--view_certificate--> Certificate    (all modules done)
//! ```
//!
//! Transitions are synchronous. A rejected transition returns an error,
//! leaves the state untouched and records no telemetry. Module completion
//! is credited in exactly one place: `go_back` out of a module view.

use std::sync::Arc;

use qc_model::{Module, ModuleId, ModuleRegistry};
use tracing::{debug, info, warn};

use crate::certificate::{Certificate, CertificateExporter};
use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::event_log::{EventLog, Payload};
use crate::events;
use crate::host::ModuleHost;
use crate::progress::ProgressTracker;
use crate::state::{SessionSnapshot, SessionState, View};
use crate::unlock::{UnlockPolicy, Unlocks};

/// Owner of the live session state.
#[derive(Debug, Clone)]
pub struct SessionController {
    registry: Arc<ModuleRegistry>,
    policy: UnlockPolicy,
    view: View,
    user_name: String,
    progress: ProgressTracker,
    log: EventLog,
    certificate: Option<Certificate>,
}

impl SessionController {
    /// Create a controller in the Welcome view with default configuration.
    pub fn new(registry: Arc<ModuleRegistry>) -> Self {
        Self::with_config(registry, SessionConfig::default())
    }

    pub fn with_config(registry: Arc<ModuleRegistry>, config: SessionConfig) -> Self {
        let progress = ProgressTracker::new(&registry);
        Self {
            registry,
            policy: UnlockPolicy::new(config.lab_unlock_threshold),
            view: View::Welcome,
            user_name: String::new(),
            progress,
            log: EventLog::with_capacity(config.log_capacity),
            certificate: None,
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Start the session for a learner and move to the main menu.
    pub fn start(&mut self, name: &str) -> Result<()> {
        if !self.view.is_welcome() {
            return Err(self.reject("main", "the session has already started"));
        }
        let name = name.trim();
        if name.is_empty() {
            warn!("rejected session start with blank name");
            return Err(SessionError::EmptyName);
        }

        self.user_name = name.to_string();
        self.view = View::Main;

        let mut payload = Payload::new();
        payload.insert("userName".to_string(), name.into());
        self.log.record(events::SESSION_START, Some(payload));
        debug!("session started");
        Ok(())
    }

    /// Open a module.
    ///
    /// Selecting a module while another one is active abandons the first
    /// without crediting it.
    pub fn select_module(&mut self, id: ModuleId) -> Result<()> {
        self.ensure_started()?;
        let module = self.registry.by_id(id).map_err(|_| {
            warn!(module_id = %id, "rejected selection of unknown module");
            SessionError::InvalidModuleId(id)
        })?;
        let payload = module_payload(module);

        if let Some(previous) = self.view.active_module() {
            debug!(module_id = %previous, "module abandoned without completion");
        }
        self.view = View::Module(id);
        self.certificate = None;
        self.log.record(events::MODULE_SELECT, Some(payload));
        debug!(module_id = %id, "module selected");
        Ok(())
    }

    /// Enter the evidence lab. Requires the lab to be unlocked.
    pub fn open_evidence_lab(&mut self) -> Result<()> {
        self.ensure_started()?;
        if !self.is_lab_unlocked() {
            let reason = format!(
                "complete {} modules to unlock the evidence lab",
                self.policy.lab_threshold()
            );
            return Err(self.reject(View::EvidenceLab.name(), reason));
        }

        self.view = View::EvidenceLab;
        self.certificate = None;
        self.log.record(events::EVIDENCE_LAB_OPENED, None);
        debug!("evidence lab opened");
        Ok(())
    }

    /// Return to the main menu from any started view.
    ///
    /// If a module was active it is credited as completed. Returns the id
    /// of the module that was active, if any.
    pub fn go_back(&mut self) -> Result<Option<ModuleId>> {
        self.ensure_started()?;
        let finished = self.view.active_module();
        if let Some(id) = finished {
            let newly_completed = self.progress.mark_completed(id)?;
            let payload = self.registry.by_id(id).ok().map(module_payload);
            self.log.record(events::MODULE_COMPLETE, payload);
            debug!(
                module_id = %id,
                newly_completed,
                completed = self.progress.completed_count(),
                "module completed"
            );
        }

        self.view = View::Main;
        self.certificate = None;
        Ok(finished)
    }

    /// Show the completion certificate. Requires every module completed.
    ///
    /// A fresh verification id is issued on each call.
    pub fn view_certificate(&mut self) -> Result<&Certificate> {
        self.ensure_started()?;
        if !self.is_certificate_unlocked() {
            let remaining = self.progress.total() - self.progress.completed_count();
            let reason = format!("{remaining} module(s) still to complete");
            return Err(self.reject(View::Certificate.name(), reason));
        }

        self.view = View::Certificate;
        self.log.record(events::CERTIFICATE_VIEWED, None);
        debug!("certificate viewed");
        Ok(self.certificate.insert(Certificate::issue(&self.user_name)))
    }

    /// Hand the certificate being viewed to an exporter.
    ///
    /// Export failures are reported back as [`SessionError::Export`] and
    /// leave the session state untouched.
    pub fn export_certificate<E>(&mut self, exporter: &mut E) -> Result<String>
    where
        E: CertificateExporter + ?Sized,
    {
        let certificate = match (&self.view, &self.certificate) {
            (View::Certificate, Some(certificate)) => certificate,
            _ => {
                return Err(SessionError::PreconditionFailed {
                    view: View::Certificate.name(),
                    reason: "no certificate is being viewed".to_string(),
                });
            }
        };

        self.log.record(events::CERTIFICATE_DOWNLOAD_START, None);
        match exporter.export(certificate) {
            Ok(location) => {
                self.log.record(events::CERTIFICATE_DOWNLOAD_SUCCESS, None);
                info!(location = %location, "certificate exported");
                Ok(location)
            }
            Err(error) => {
                let mut payload = Payload::new();
                payload.insert("error".to_string(), error.message.clone().into());
                self.log
                    .record(events::CERTIFICATE_DOWNLOAD_ERROR, Some(payload));
                warn!(error = %error, "certificate export failed");
                Err(SessionError::Export(error))
            }
        }
    }

    // ========================================================================
    // Telemetry
    // ========================================================================

    /// Record an event on behalf of a simulation. Never fails.
    pub fn record_event(&mut self, event_name: &str, payload: Option<Payload>) {
        self.log.record(event_name, payload);
    }

    /// Callback handle for the simulation shown in the current view.
    pub fn module_host(&mut self) -> Result<ModuleHost<'_>> {
        match self.view {
            View::Module(_) | View::EvidenceLab | View::Certificate => Ok(ModuleHost::new(self)),
            View::Welcome => Err(SessionError::NotStarted),
            View::Main => Err(SessionError::PreconditionFailed {
                view: View::Main.name(),
                reason: "no simulation is running".to_string(),
            }),
        }
    }

    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn view(&self) -> View {
        self.view
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn policy(&self) -> UnlockPolicy {
        self.policy
    }

    /// Module currently shown, if any.
    pub fn active_module(&self) -> Option<&Module> {
        self.view
            .active_module()
            .and_then(|id| self.registry.by_id(id).ok())
    }

    /// Certificate issued by the last `view_certificate`, while it is shown.
    pub fn certificate(&self) -> Option<&Certificate> {
        self.certificate.as_ref()
    }

    pub fn is_lab_unlocked(&self) -> bool {
        self.policy.is_lab_unlocked(&self.progress)
    }

    pub fn is_certificate_unlocked(&self) -> bool {
        self.policy
            .is_certificate_unlocked(&self.progress, &self.registry)
    }

    pub fn unlocks(&self) -> Unlocks {
        self.policy.evaluate(&self.progress, &self.registry)
    }

    /// Copy of the mutable session state.
    pub fn state(&self) -> SessionState {
        SessionState {
            view: self.view,
            user_name: self.user_name.clone(),
            completed_module_ids: self.progress.completed_ids().clone(),
        }
    }

    /// Detached snapshot for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        let unlocks = self.unlocks();
        SessionSnapshot {
            state: self.state(),
            active_module_id: self.view.active_module(),
            progress_percent: self.progress.progress_percent(),
            lab_unlocked: unlocks.lab,
            certificate_unlocked: unlocks.certificate,
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn ensure_started(&self) -> Result<()> {
        if self.view.is_welcome() {
            warn!("rejected transition before session start");
            return Err(SessionError::NotStarted);
        }
        Ok(())
    }

    fn reject(&self, view: &'static str, reason: impl Into<String>) -> SessionError {
        let reason = reason.into();
        warn!(from = %self.view, to = view, reason = %reason, "transition rejected");
        SessionError::PreconditionFailed { view, reason }
    }
}

fn module_payload(module: &Module) -> Payload {
    let mut payload = Payload::new();
    payload.insert("moduleId".to_string(), module.id.get().into());
    payload.insert("moduleTitle".to_string(), module.title.clone().into());
    payload
}
