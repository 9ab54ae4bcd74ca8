//! Journey script parsing.
//!
//! One command per line. Blank lines and lines starting with `#` are
//! skipped.
//!
//! ```text
//! start Ana Souza
//! select 1
//! back
//! lab
//! scan apk
//! certificate
//! export
//! ```

use qc_model::ModuleId;
use qc_simulation::EvidenceKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// `start <name>`; the rest of the line is the name.
    Start(String),
    Select(ModuleId),
    Back,
    Lab,
    Certificate,
    Export,
    /// `scan apk|network`, inside the evidence lab.
    Scan(EvidenceKind),
    /// `password <text>`, inside a module.
    Password(String),
    Status,
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("invalid module id `{0}`")]
    InvalidModuleId(String),
    #[error("unknown scan type `{0}` (expected apk or network)")]
    UnknownScanType(String),
    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(String),
}

/// Parse one line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "start" => ScriptCommand::Start(rest.to_string()),
        "select" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingArgument {
                    command: "select",
                    expected: "a module id",
                });
            }
            let id = rest
                .parse::<u32>()
                .map_err(|_| ScriptError::InvalidModuleId(rest.to_string()))?;
            ScriptCommand::Select(ModuleId::new(id))
        }
        "scan" => match rest {
            "apk" => ScriptCommand::Scan(EvidenceKind::Permission),
            "network" => ScriptCommand::Scan(EvidenceKind::Traffic),
            "" => {
                return Err(ScriptError::MissingArgument {
                    command: "scan",
                    expected: "apk or network",
                });
            }
            other => return Err(ScriptError::UnknownScanType(other.to_string())),
        },
        "password" => ScriptCommand::Password(rest.to_string()),
        other => {
            let command = match other {
                "back" => ScriptCommand::Back,
                "lab" => ScriptCommand::Lab,
                "certificate" => ScriptCommand::Certificate,
                "export" => ScriptCommand::Export,
                "status" => ScriptCommand::Status,
                "log" => ScriptCommand::Log,
                _ => return Err(ScriptError::UnknownCommand(word.to_string())),
            };
            if !rest.is_empty() {
                return Err(ScriptError::UnexpectedArgument(word.to_string()));
            }
            command
        }
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_blanks() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# start Ana"), Ok(None));
    }

    #[test]
    fn test_start_keeps_full_name() {
        assert_eq!(
            parse_line("start  Ana Souza "),
            Ok(Some(ScriptCommand::Start("Ana Souza".to_string())))
        );
        assert_eq!(
            parse_line("start"),
            Ok(Some(ScriptCommand::Start(String::new())))
        );
    }

    #[test]
    fn test_select() {
        assert_eq!(
            parse_line("select 3"),
            Ok(Some(ScriptCommand::Select(ModuleId::new(3))))
        );
        assert_eq!(
            parse_line("select x"),
            Err(ScriptError::InvalidModuleId("x".to_string()))
        );
        assert!(matches!(
            parse_line("select"),
            Err(ScriptError::MissingArgument { command: "select", .. })
        ));
    }

    #[test]
    fn test_scan_types() {
        assert_eq!(
            parse_line("scan network"),
            Ok(Some(ScriptCommand::Scan(EvidenceKind::Traffic)))
        );
        assert_eq!(
            parse_line("scan wifi"),
            Err(ScriptError::UnknownScanType("wifi".to_string()))
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(parse_line("BACK"), Ok(Some(ScriptCommand::Back)));
        assert_eq!(parse_line("Status"), Ok(Some(ScriptCommand::Status)));
    }

    #[test]
    fn test_unknown_and_extra_arguments() {
        assert_eq!(
            parse_line("jump 2"),
            Err(ScriptError::UnknownCommand("jump".to_string()))
        );
        assert_eq!(
            parse_line("back now"),
            Err(ScriptError::UnexpectedArgument("back".to_string()))
        );
    }
}
