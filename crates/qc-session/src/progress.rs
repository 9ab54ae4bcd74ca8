//! Module completion tracking.

use std::collections::BTreeSet;

use qc_model::{ModuleId, ModuleRegistry};

use crate::error::{Result, SessionError};

/// Set of completed module ids, restricted to the ids of one registry.
///
/// Completion is a set, not a counter: marking a module twice is a no-op.
/// The set never shrinks during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTracker {
    known: BTreeSet<ModuleId>,
    completed: BTreeSet<ModuleId>,
}

impl ProgressTracker {
    /// Create an empty tracker for the modules of `registry`.
    pub fn new(registry: &ModuleRegistry) -> Self {
        Self {
            known: registry.ids().collect(),
            completed: BTreeSet::new(),
        }
    }

    /// Mark a module as completed.
    ///
    /// Returns `true` if the module was newly added, `false` if it was
    /// already completed.
    pub fn mark_completed(&mut self, id: ModuleId) -> Result<bool> {
        if !self.known.contains(&id) {
            return Err(SessionError::InvalidModuleId(id));
        }
        Ok(self.completed.insert(id))
    }

    pub fn is_completed(&self, id: ModuleId) -> bool {
        self.completed.contains(&id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Number of modules in the registry this tracker was built for.
    pub fn total(&self) -> usize {
        self.known.len()
    }

    pub fn completed_ids(&self) -> &BTreeSet<ModuleId> {
        &self.completed
    }

    /// Fraction of modules completed, in `[0, 1]` (0 for an empty registry).
    pub fn completion_ratio(&self) -> f64 {
        if self.known.is_empty() {
            return 0.0;
        }
        self.completed.len() as f64 / self.known.len() as f64
    }

    /// Completion as a percentage in `[0, 100]`.
    pub fn progress_percent(&self) -> f64 {
        self.completion_ratio() * 100.0
    }
}
