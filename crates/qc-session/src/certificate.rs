//! Completion certificate and its export seam.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ExportError;

const FILE_STEM_PREFIX: &str = "Certificado-Autonomia-Digital-";
const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const RANDOM_WIDTH: usize = 9;

/// Verification code printed on a certificate.
///
/// Format: `QC-<base36 millis>-<9 base36 random digits>`, uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VerificationId(String);

impl VerificationId {
    /// Generate a fresh id for the given issue time.
    pub fn generate(at: DateTime<Utc>) -> Self {
        let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        Self::from_parts(millis, Uuid::new_v4().as_u128())
    }

    /// Build an id from a timestamp and an entropy source.
    pub fn from_parts(millis: u64, entropy: u128) -> Self {
        let modulus = 36u128.pow(RANDOM_WIDTH as u32);
        let random = to_base36(entropy % modulus);
        Self(format!(
            "QC-{}-{:0>width$}",
            to_base36(u128::from(millis)),
            random,
            width = RANDOM_WIDTH
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Certificate of completion for one learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub name: String,
    pub verification_id: VerificationId,
    pub issued_at: DateTime<Utc>,
}

impl Certificate {
    /// Issue a certificate with a new verification id.
    pub fn issue(name: &str) -> Self {
        let issued_at = Utc::now();
        Self {
            name: name.trim().to_string(),
            verification_id: VerificationId::generate(issued_at),
            issued_at,
        }
    }

    /// File name without extension.
    ///
    /// Whitespace runs become a single `_`; any other character that is not
    /// alphanumeric, `-` or `_` becomes `_`, so the stem never contains a
    /// path separator or `..`.
    pub fn file_stem(&self) -> String {
        let name: String = self
            .name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{FILE_STEM_PREFIX}{name}")
    }

    /// Name offered for the downloadable PDF.
    pub fn download_file_name(&self) -> String {
        format!("{}.pdf", self.file_stem())
    }
}

/// Produces a downloadable artifact for a certificate.
pub trait CertificateExporter {
    /// Render `certificate` and return where the artifact was written.
    fn export(&mut self, certificate: &Certificate) -> Result<String, ExportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_id_format() {
        let id = VerificationId::from_parts(0, 0);
        assert_eq!(id.as_str(), "QC-0-000000000");

        let id = VerificationId::from_parts(36, 35);
        assert_eq!(id.as_str(), "QC-10-00000000Z");
    }

    #[test]
    fn test_verification_id_random_part_is_bounded() {
        let id = VerificationId::from_parts(1, u128::MAX);
        let random = id.as_str().rsplit('-').next().unwrap();
        assert_eq!(random.len(), RANDOM_WIDTH);
        assert!(random.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generated_ids_differ() {
        let now = Utc::now();
        assert_ne!(VerificationId::generate(now), VerificationId::generate(now));
    }

    #[test]
    fn test_download_file_name_collapses_whitespace() {
        let certificate = Certificate::issue("  Ana   Maria Silva ");
        assert_eq!(certificate.name, "Ana   Maria Silva");
        assert_eq!(
            certificate.download_file_name(),
            "Certificado-Autonomia-Digital-Ana_Maria_Silva.pdf"
        );
    }

    #[test]
    fn test_file_stem_neutralises_path_characters() {
        let certificate = Certificate::issue("x/../../escaped");
        assert_eq!(certificate.name, "x/../../escaped");
        assert_eq!(
            certificate.file_stem(),
            "Certificado-Autonomia-Digital-x_______escaped"
        );

        let certificate = Certificate::issue("João C:\\tmp");
        assert_eq!(
            certificate.file_stem(),
            "Certificado-Autonomia-Digital-João_C__tmp"
        );
    }

    #[test]
    fn test_issued_id_starts_with_prefix() {
        let certificate = Certificate::issue("Bia");
        assert!(certificate.verification_id.as_str().starts_with("QC-"));
        assert_eq!(
            certificate.verification_id.as_str(),
            certificate.verification_id.as_str().to_uppercase()
        );
    }
}
