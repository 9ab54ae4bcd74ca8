//! Callback contract handed to module simulations.

use qc_model::ModuleId;

use crate::controller::SessionController;
use crate::error::Result;
use crate::event_log::{EventLog, Payload};
use crate::state::View;

/// Destination for opaque telemetry events.
pub trait TelemetrySink {
    fn log_event(&mut self, event_name: &str, payload: Option<Payload>);
}

impl TelemetrySink for EventLog {
    fn log_event(&mut self, event_name: &str, payload: Option<Payload>) {
        self.record(event_name, payload);
    }
}

/// Handle given to a running simulation (module, evidence lab or
/// certificate screen).
///
/// The simulation may log any number of events and signals its exit by
/// calling [`ModuleHost::finish`], which consumes the handle so it can only
/// happen once.
pub struct ModuleHost<'a> {
    controller: &'a mut SessionController,
}

impl<'a> ModuleHost<'a> {
    pub(crate) fn new(controller: &'a mut SessionController) -> Self {
        Self { controller }
    }

    /// View the hosted simulation is running in.
    pub fn view(&self) -> View {
        self.controller.view()
    }

    /// Module being hosted, if the host belongs to a module view.
    pub fn module_id(&self) -> Option<ModuleId> {
        self.controller.view().active_module()
    }

    /// Leave the simulation; credits the module if one was active.
    pub fn finish(self) -> Result<Option<ModuleId>> {
        self.controller.go_back()
    }
}

impl TelemetrySink for ModuleHost<'_> {
    fn log_event(&mut self, event_name: &str, payload: Option<Payload>) {
        self.controller.record_event(event_name, payload);
    }
}
