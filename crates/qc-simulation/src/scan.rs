//! Evidence lab scan: reveals permission or traffic findings one at a time
//! and scores how much surveillance they expose.

use qc_session::{Payload, TelemetrySink};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::reveal::{RevealSequence, Tick};

/// What was scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    /// Manifest permissions of the game package.
    Permission,
    /// Captured network traffic.
    Traffic,
}

impl EvidenceKind {
    /// Scan type reported in telemetry.
    pub const fn scan_type(&self) -> &'static str {
        match self {
            Self::Permission => "apk",
            Self::Traffic => "network",
        }
    }
}

/// Severity tag of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceTag {
    Essential,
    Surveillance,
    Dangerous,
}

impl EvidenceTag {
    /// Tag as shown in the lab.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Essential => "Essencial",
            Self::Surveillance => "Vigilância",
            Self::Dangerous => "Perigoso",
        }
    }

    /// Contribution to the threat level.
    pub const fn weight(&self) -> u32 {
        match self {
            Self::Essential => 0,
            Self::Surveillance => 1,
            Self::Dangerous => 2,
        }
    }
}

/// One finding the scan can reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub id: String,
    pub kind: EvidenceKind,
    pub tag: EvidenceTag,
    /// Raw line shown in the analysis terminal.
    pub line: String,
    pub title: String,
}

/// Result of advancing a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTick {
    /// A finding was revealed; `alert` is set for dangerous findings.
    Found { item_id: String, alert: bool },
    /// Every finding of the scanned kind is visible.
    Complete,
    /// No scan is running.
    Idle,
}

/// Scan over a fixed catalog of findings.
#[derive(Debug, Clone)]
pub struct EvidenceScan {
    catalog: Vec<EvidenceItem>,
    active: Option<EvidenceKind>,
    sequence: RevealSequence<EvidenceItem>,
    selected: Option<String>,
}

impl EvidenceScan {
    pub fn new(catalog: Vec<EvidenceItem>) -> Self {
        Self {
            catalog,
            active: None,
            sequence: RevealSequence::new(Vec::new()),
            selected: None,
        }
    }

    /// Start scanning findings of `kind`, stopping any scan in progress.
    pub fn run(&mut self, kind: EvidenceKind, sink: &mut impl TelemetrySink) -> Result<()> {
        let items: Vec<EvidenceItem> = self
            .catalog
            .iter()
            .filter(|item| item.kind == kind)
            .cloned()
            .collect();
        if items.is_empty() {
            return Err(SimulationError::NothingToScan(kind.scan_type()));
        }

        self.stop();
        self.active = Some(kind);
        self.selected = None;
        self.sequence.restart_with(items);

        let mut payload = Payload::new();
        payload.insert("type".to_string(), kind.scan_type().into());
        sink.log_event("scan_started", Some(payload));
        tracing::debug!(scan = kind.scan_type(), "evidence scan started");
        Ok(())
    }

    /// Reveal the next finding. The first finding is auto-selected.
    pub fn tick(&mut self) -> ScanTick {
        match self.sequence.tick() {
            Tick::Revealed(item) => {
                let item_id = item.id.clone();
                let alert = item.tag == EvidenceTag::Dangerous;
                if self.selected.is_none() {
                    self.selected = Some(item_id.clone());
                }
                ScanTick::Found { item_id, alert }
            }
            Tick::Finished => ScanTick::Complete,
            Tick::Idle => ScanTick::Idle,
        }
    }

    /// Cancel the running scan, keeping what was already revealed.
    pub fn stop(&mut self) -> bool {
        self.sequence.cancel()
    }

    /// Inspect a revealed finding.
    pub fn select(&mut self, item_id: &str) -> bool {
        let found = self.results().iter().any(|item| item.id == item_id);
        if found {
            self.selected = Some(item_id.to_string());
        }
        found
    }

    pub fn selected(&self) -> Option<&EvidenceItem> {
        let id = self.selected.as_deref()?;
        self.results().iter().find(|item| item.id == id)
    }

    pub fn results(&self) -> &[EvidenceItem] {
        self.sequence.revealed()
    }

    pub fn active_kind(&self) -> Option<EvidenceKind> {
        self.active
    }

    pub fn is_scanning(&self) -> bool {
        self.sequence.is_running()
    }

    /// Revealed weight over the maximum weight of the scanned kind, as a
    /// percentage. Before any scan the whole catalog is the denominator.
    pub fn threat_level(&self) -> f64 {
        let revealed: u32 = self.results().iter().map(|item| item.tag.weight()).sum();
        let max: u32 = self
            .catalog
            .iter()
            .filter(|item| self.active.is_none_or(|kind| item.kind == kind))
            .map(|item| item.tag.weight())
            .sum();
        if max == 0 {
            return 0.0;
        }
        f64::from(revealed) / f64::from(max) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qc_session::EventLog;

    fn item(id: &str, kind: EvidenceKind, tag: EvidenceTag) -> EvidenceItem {
        EvidenceItem {
            id: id.to_string(),
            kind,
            tag,
            line: format!("<{id}>"),
            title: id.to_string(),
        }
    }

    fn catalog() -> Vec<EvidenceItem> {
        vec![
            item("perm_internet", EvidenceKind::Permission, EvidenceTag::Essential),
            item("perm_location", EvidenceKind::Permission, EvidenceTag::Surveillance),
            item("perm_camera", EvidenceKind::Permission, EvidenceTag::Dangerous),
            item("net_telemetry", EvidenceKind::Traffic, EvidenceTag::Surveillance),
        ]
    }

    #[test]
    fn test_scan_reveals_only_requested_kind() {
        let mut log = EventLog::new();
        let mut scan = EvidenceScan::new(catalog());
        scan.run(EvidenceKind::Permission, &mut log).unwrap();

        assert_eq!(
            scan.tick(),
            ScanTick::Found {
                item_id: "perm_internet".to_string(),
                alert: false
            }
        );
        scan.tick();
        assert_eq!(
            scan.tick(),
            ScanTick::Found {
                item_id: "perm_camera".to_string(),
                alert: true
            }
        );
        assert_eq!(scan.tick(), ScanTick::Complete);
        assert_eq!(scan.tick(), ScanTick::Idle);
        assert_eq!(scan.results().len(), 3);
        assert_eq!(scan.selected().map(|i| i.id.as_str()), Some("perm_internet"));
    }

    #[test]
    fn test_threat_level() {
        let mut log = EventLog::new();
        let mut scan = EvidenceScan::new(catalog());
        assert_eq!(scan.threat_level(), 0.0);

        scan.run(EvidenceKind::Permission, &mut log).unwrap();
        scan.tick();
        scan.tick();
        // 1 of a possible 3
        assert!((scan.threat_level() - 100.0 / 3.0).abs() < 1e-9);
        scan.tick();
        assert!((scan.threat_level() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_restart_stops_previous_scan() {
        let mut log = EventLog::new();
        let mut scan = EvidenceScan::new(catalog());
        scan.run(EvidenceKind::Permission, &mut log).unwrap();
        scan.tick();
        scan.run(EvidenceKind::Traffic, &mut log).unwrap();
        assert!(scan.results().is_empty());
        assert_eq!(scan.active_kind(), Some(EvidenceKind::Traffic));
        assert_eq!(log.len(), 2);
        assert_eq!(
            log.latest().unwrap().payload.as_ref().unwrap()["type"],
            "network"
        );
    }

    #[test]
    fn test_empty_kind_is_rejected() {
        let mut log = EventLog::new();
        let mut scan = EvidenceScan::new(vec![item(
            "perm_internet",
            EvidenceKind::Permission,
            EvidenceTag::Essential,
        )]);
        assert_eq!(
            scan.run(EvidenceKind::Traffic, &mut log),
            Err(SimulationError::NothingToScan("network"))
        );
        assert!(log.is_empty());
    }

    #[test]
    fn test_select_only_revealed_items() {
        let mut log = EventLog::new();
        let mut scan = EvidenceScan::new(catalog());
        scan.run(EvidenceKind::Permission, &mut log).unwrap();
        scan.tick();
        assert!(!scan.select("perm_camera"));
        scan.tick();
        assert!(scan.select("perm_location"));
        assert_eq!(scan.selected().map(|i| i.tag), Some(EvidenceTag::Surveillance));
    }
}
