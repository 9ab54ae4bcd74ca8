//! Leaf simulations run inside journey modules.
//!
//! Each simulation is a small local state machine. Timing is external: a
//! scheduler calls `tick` (or the equivalent action method) and the
//! simulation reports what became visible. Telemetry goes through a
//! [`qc_session::TelemetrySink`], normally the session's module host.
//!
//! - [`RevealSequence`]: step-by-step reveal of terminal lines or scan rows
//! - [`EvidenceScan`]: permission / traffic scan with a threat level
//! - [`EngagementProfiler`]: click-driven predictive profile demo
//! - [`PasswordStrength`]: four-rule password scoring
//! - [`GuideChecklist`]: self-protection checklist progress
//!
//! [`catalog`] holds the canned evidence rows and guide items.

pub mod catalog;
pub mod checklist;
pub mod error;
pub mod password;
pub mod profile;
pub mod reveal;
pub mod scan;

pub use catalog::{lab_evidence, protection_guide};
pub use checklist::{GuideChecklist, GuideItem};
pub use error::{Result, SimulationError};
pub use password::{PasswordStrength, StrengthLabel};
pub use profile::{AgeBracket, ClickPattern, DemoTelemetry, Engagement, EngagementProfiler};
pub use reveal::{RevealSequence, Tick};
pub use scan::{EvidenceItem, EvidenceKind, EvidenceScan, EvidenceTag, ScanTick};
