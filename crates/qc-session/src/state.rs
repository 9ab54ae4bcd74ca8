//! Session state and render snapshots.

use std::collections::BTreeSet;
use std::fmt;

use qc_model::ModuleId;
use serde::{Deserialize, Serialize};

// =============================================================================
// VIEW ENUM
// =============================================================================

/// Current screen of the journey.
///
/// The active module lives inside [`View::Module`], so "a module is active"
/// and "the module view is shown" cannot disagree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "view", content = "moduleId", rename_all = "snake_case")]
pub enum View {
    /// Name entry screen (initial state)
    #[default]
    Welcome,

    /// Module menu with progress bar
    Main,

    /// A module simulation is running
    Module(ModuleId),

    /// Evidence lab (gated)
    EvidenceLab,

    /// Completion certificate (gated)
    Certificate,
}

impl View {
    /// Stable snake_case name of this view.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Main => "main",
            Self::Module(_) => "module",
            Self::EvidenceLab => "evidence_lab",
            Self::Certificate => "certificate",
        }
    }

    /// Get the active module id if in the Module view.
    pub fn active_module(&self) -> Option<ModuleId> {
        match self {
            Self::Module(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_welcome(&self) -> bool {
        matches!(self, Self::Welcome)
    }

    pub fn is_main(&self) -> bool {
        matches!(self, Self::Main)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module(id) => write!(f, "module({id})"),
            other => f.write_str(other.name()),
        }
    }
}

// =============================================================================
// SNAPSHOTS
// =============================================================================

/// Copy of the session's mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub view: View,
    pub user_name: String,
    pub completed_module_ids: BTreeSet<ModuleId>,
}

impl SessionState {
    pub fn active_module_id(&self) -> Option<ModuleId> {
        self.view.active_module()
    }
}

/// Everything a renderer needs, detached from the controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub state: SessionState,
    /// Module shown by [`View::Module`], `null` on every other screen.
    pub active_module_id: Option<ModuleId>,
    /// Completion percentage in `[0, 100]`.
    pub progress_percent: f64,
    pub lab_unlocked: bool,
    pub certificate_unlocked: bool,
}
