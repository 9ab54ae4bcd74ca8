//! Feature gating derived from completion state.
//!
//! Everything here is a pure function of a [`ProgressTracker`] and the
//! registry it was built from.

use qc_model::ModuleRegistry;

use crate::progress::ProgressTracker;

/// Completed modules needed to open the evidence lab.
pub const LAB_UNLOCK_THRESHOLD: usize = 2;

/// Unlock rules for gated views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockPolicy {
    lab_threshold: usize,
}

/// Result of evaluating an [`UnlockPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unlocks {
    pub lab: bool,
    pub certificate: bool,
}

impl Default for UnlockPolicy {
    fn default() -> Self {
        Self::new(LAB_UNLOCK_THRESHOLD)
    }
}

impl UnlockPolicy {
    pub const fn new(lab_threshold: usize) -> Self {
        Self { lab_threshold }
    }

    pub const fn lab_threshold(&self) -> usize {
        self.lab_threshold
    }

    /// The evidence lab opens once enough modules are completed.
    pub fn is_lab_unlocked(&self, tracker: &ProgressTracker) -> bool {
        tracker.completed_count() >= self.lab_threshold
    }

    /// The certificate requires every registry module to be completed.
    ///
    /// An empty registry trivially satisfies this.
    pub fn is_certificate_unlocked(
        &self,
        tracker: &ProgressTracker,
        registry: &ModuleRegistry,
    ) -> bool {
        registry.ids().all(|id| tracker.is_completed(id))
    }

    pub fn evaluate(&self, tracker: &ProgressTracker, registry: &ModuleRegistry) -> Unlocks {
        Unlocks {
            lab: self.is_lab_unlocked(tracker),
            certificate: self.is_certificate_unlocked(tracker, registry),
        }
    }
}

/// [`UnlockPolicy::is_lab_unlocked`] with the default threshold.
pub fn is_lab_unlocked(tracker: &ProgressTracker) -> bool {
    UnlockPolicy::default().is_lab_unlocked(tracker)
}

/// [`UnlockPolicy::is_certificate_unlocked`] with the default policy.
pub fn is_certificate_unlocked(tracker: &ProgressTracker, registry: &ModuleRegistry) -> bool {
    UnlockPolicy::default().is_certificate_unlocked(tracker, registry)
}
