//! Scripted journeys through a session.
//!
//! Each script line is echoed as `> line`, followed by indented result
//! lines. Parse errors and rejected transitions are reported inline and the
//! script keeps going.

use std::io::{self, Write};

use qc_session::{CertificateExporter, SessionController, SessionError, View};
use qc_simulation::{
    EvidenceKind, EvidenceScan, PasswordStrength, ScanTick, SimulationError, lab_evidence,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::logging::redact_value;
use crate::script::{ScriptCommand, parse_line};

/// Counts of what happened while running a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JourneyOutcome {
    /// Commands that completed.
    pub executed: usize,
    /// Commands that failed to parse or were refused.
    pub rejected: usize,
}

/// Why a single step was refused.
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

impl StepError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Session(e) => e.user_message(),
            Self::Simulation(e) => e.to_string(),
        }
    }
}

/// Run every line of `script` against `session`, writing the transcript to `out`.
pub fn run_script<W: Write>(
    session: &mut SessionController,
    exporter: &mut dyn CertificateExporter,
    script: &str,
    out: &mut W,
) -> io::Result<JourneyOutcome> {
    let mut outcome = JourneyOutcome::default();

    for (index, raw) in script.lines().enumerate() {
        let command = match parse_line(raw) {
            Ok(None) => continue,
            Ok(Some(command)) => command,
            Err(error) => {
                writeln!(out, "> {}", raw.trim())?;
                writeln!(out, "  error (line {}): {error}", index + 1)?;
                outcome.rejected += 1;
                continue;
            }
        };

        writeln!(out, "> {}", raw.trim())?;
        match execute(session, exporter, &command) {
            Ok(lines) => {
                outcome.executed += 1;
                for line in lines {
                    writeln!(out, "  {line}")?;
                }
            }
            Err(error) => {
                outcome.rejected += 1;
                debug!(line = index + 1, %error, "script step rejected");
                writeln!(out, "  rejected: {}", error.user_message())?;
            }
        }
    }

    info!(
        learner = redact_value(session.user_name()),
        executed = outcome.executed,
        rejected = outcome.rejected,
        "journey script finished"
    );
    Ok(outcome)
}

/// Apply one command, returning the lines to print.
pub fn execute(
    session: &mut SessionController,
    exporter: &mut dyn CertificateExporter,
    command: &ScriptCommand,
) -> Result<Vec<String>, StepError> {
    let lines = match command {
        ScriptCommand::Start(name) => {
            session.start(name)?;
            info!(learner = redact_value(session.user_name()), "journey started");
            vec![format!("welcome, {}", session.user_name()), status_line(session)]
        }
        ScriptCommand::Select(id) => {
            session.select_module(*id)?;
            let title = session
                .active_module()
                .map(|module| module.title.clone())
                .unwrap_or_default();
            vec![title, status_line(session)]
        }
        ScriptCommand::Back => {
            let first_time = session
                .view()
                .active_module()
                .is_some_and(|id| !session.progress().is_completed(id));
            let finished = session.go_back()?;
            let headline = match finished {
                Some(id) if first_time => format!("module {id} completed"),
                Some(id) => format!("module {id} revisited"),
                None => "back to the main menu".to_string(),
            };
            vec![headline, status_line(session)]
        }
        ScriptCommand::Lab => {
            session.open_evidence_lab()?;
            vec![status_line(session)]
        }
        ScriptCommand::Certificate => {
            let certificate = session.view_certificate()?;
            vec![
                format!("certificate for {}", certificate.name),
                format!("verification {}", certificate.verification_id),
                format!("file {}", certificate.download_file_name()),
            ]
        }
        ScriptCommand::Export => {
            let location = session.export_certificate(exporter)?;
            vec![format!("exported to {location}")]
        }
        ScriptCommand::Scan(kind) => run_scan(session, *kind)?,
        ScriptCommand::Password(text) => {
            if session.view().active_module().is_none() {
                return Err(SessionError::PreconditionFailed {
                    view: "module",
                    reason: "the password checker lives inside a module".to_string(),
                }
                .into());
            }
            let mut host = session.module_host()?;
            match PasswordStrength::test(text, &mut host) {
                Some(strength) => {
                    let mut lines = vec![format!(
                        "strength {} ({}/4)",
                        strength.label.label(),
                        strength.score
                    )];
                    lines.extend(strength.suggestions.iter().map(|s| format!("- {s}")));
                    lines
                }
                None => vec!["empty password".to_string()],
            }
        }
        ScriptCommand::Status => vec![status_line(session)],
        ScriptCommand::Log => session
            .event_log()
            .chronological()
            .enumerate()
            .map(|(i, entry)| match &entry.payload {
                Some(payload) => format!(
                    "{}. {} {}",
                    i + 1,
                    entry.event_name,
                    serde_json::Value::Object(payload.clone())
                ),
                None => format!("{}. {}", i + 1, entry.event_name),
            })
            .collect(),
    };
    Ok(lines)
}

fn run_scan(session: &mut SessionController, kind: EvidenceKind) -> Result<Vec<String>, StepError> {
    if session.view() != View::EvidenceLab {
        return Err(SessionError::PreconditionFailed {
            view: View::EvidenceLab.name(),
            reason: "scans run inside the evidence lab".to_string(),
        }
        .into());
    }

    let mut host = session.module_host()?;
    let mut scan = EvidenceScan::new(lab_evidence());
    scan.run(kind, &mut host)?;

    let mut lines = Vec::new();
    while let ScanTick::Found { item_id, alert } = scan.tick() {
        let Some(item) = scan.results().iter().find(|item| item.id == item_id) else {
            continue;
        };
        let marker = if alert { "!" } else { " " };
        lines.push(format!("{marker} {:<10} {}", item.tag.label(), item.title));
    }
    lines.push(format!("threat level {:.0}%", scan.threat_level()));
    Ok(lines)
}

/// One-line summary of the session.
pub fn status_line(session: &SessionController) -> String {
    let snapshot = session.snapshot();
    let progress = session.progress();
    format!(
        "view={} progress={:.0}% completed={}/{} lab={} certificate={}",
        snapshot.state.view,
        snapshot.progress_percent,
        progress.completed_count(),
        progress.total(),
        lock_label(snapshot.lab_unlocked),
        lock_label(snapshot.certificate_unlocked),
    )
}

fn lock_label(unlocked: bool) -> &'static str {
    if unlocked { "open" } else { "locked" }
}
