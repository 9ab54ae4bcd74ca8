//! Plain-text certificate export.

use std::path::PathBuf;

use qc_persistence::write_atomic;
use qc_session::{Certificate, CertificateExporter, ExportError};

/// Writes `<certificate file stem>.txt` into a directory.
#[derive(Debug, Clone)]
pub struct TextCertificateExporter {
    out_dir: PathBuf,
}

impl TextCertificateExporter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }
}

impl CertificateExporter for TextCertificateExporter {
    fn export(&mut self, certificate: &Certificate) -> Result<String, ExportError> {
        let path = self
            .out_dir
            .join(format!("{}.txt", certificate.file_stem()));
        if path.parent() != Some(self.out_dir.as_path()) {
            return Err(ExportError::new(format!(
                "Refusing to write certificate outside {}",
                self.out_dir.display()
            )));
        }
        write_atomic(&path, render(certificate).as_bytes())
            .map_err(|e| ExportError::new(e.user_message()))?;
        Ok(path.display().to_string())
    }
}

/// Text body of the certificate.
pub fn render(certificate: &Certificate) -> String {
    format!(
        "CERTIFICADO DE AUTONOMIA DIGITAL\n\
         Quebrada Conectada\n\
         \n\
         Certificamos que {name} concluiu a jornada de letramento digital\n\
         e segurança da informação, demonstrando consciência crítica sobre\n\
         o capitalismo de vigilância e a proteção de dados.\n\
         \n\
         Emitido em: {date}\n\
         Código de verificação: {id}\n",
        name = certificate.name,
        date = certificate.issued_at.format("%d/%m/%Y"),
        id = certificate.verification_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_named_file() {
        let dir = tempdir().unwrap();
        let certificate = Certificate::issue("Ana Souza");
        let mut exporter = TextCertificateExporter::new(dir.path());

        let location = exporter.export(&certificate).unwrap();

        let path = dir
            .path()
            .join("Certificado-Autonomia-Digital-Ana_Souza.txt");
        assert_eq!(location, path.display().to_string());
        let body = std::fs::read_to_string(path).unwrap();
        assert!(body.contains("Certificamos que Ana Souza"));
        assert!(body.contains(certificate.verification_id.as_str()));
    }

    #[test]
    fn test_export_stays_inside_out_dir() {
        let root = tempdir().unwrap();
        let out_dir = root.path().join("out");
        let mut exporter = TextCertificateExporter::new(&out_dir);

        let location = exporter
            .export(&Certificate::issue("x/../../escaped"))
            .unwrap();

        let path = out_dir.join("Certificado-Autonomia-Digital-x_______escaped.txt");
        assert_eq!(location, path.display().to_string());
        assert!(path.is_file());
        assert!(!root.path().join("escaped.txt").exists());
        let entries: Vec<_> = std::fs::read_dir(root.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_unwritable_directory_is_reported() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let mut exporter = TextCertificateExporter::new(blocker.join("sub"));

        let err = exporter.export(&Certificate::issue("Ana")).unwrap_err();
        assert!(err.message.starts_with("Could not"));
    }
}
