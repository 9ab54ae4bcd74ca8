//! Canned content for the evidence lab and the self-protection guide.

use crate::checklist::{GuideChecklist, GuideItem};
use crate::scan::{EvidenceItem, EvidenceKind, EvidenceTag};

fn item(id: &str, kind: EvidenceKind, tag: EvidenceTag, line: &str, title: &str) -> EvidenceItem {
    EvidenceItem {
        id: id.to_string(),
        kind,
        tag,
        line: line.to_string(),
        title: title.to_string(),
    }
}

/// Manifest permissions and captured traffic of the sample game.
pub fn lab_evidence() -> Vec<EvidenceItem> {
    use EvidenceKind::{Permission, Traffic};
    use EvidenceTag::{Dangerous, Essential, Surveillance};

    vec![
        item(
            "perm_internet",
            Permission,
            Essential,
            r#"<uses-permission android:name="android.permission.INTERNET" />"#,
            "Acesso à Internet",
        ),
        item(
            "perm_location",
            Permission,
            Surveillance,
            r#"<uses-permission android:name="android.permission.ACCESS_FINE_LOCATION" />"#,
            "Localização Precisa (GPS)",
        ),
        item(
            "perm_contacts",
            Permission,
            Dangerous,
            r#"<uses-permission android:name="android.permission.READ_CONTACTS" />"#,
            "Ler Contatos",
        ),
        item(
            "perm_camera",
            Permission,
            Dangerous,
            r#"<uses-permission android:name="android.permission.CAMERA" />"#,
            "Acesso à Câmera",
        ),
        item(
            "perm_audio",
            Permission,
            Dangerous,
            r#"<uses-permission android:name="android.permission.RECORD_AUDIO" />"#,
            "Gravar Áudio",
        ),
        item(
            "net_gameserver",
            Traffic,
            Essential,
            "1   0.512  192.168.1.10 -> 104.18.3.120   UDP      [Player Position Update]",
            "Servidor do Jogo",
        ),
        item(
            "net_telemetry",
            Traffic,
            Surveillance,
            "2   1.230  192.168.1.10 -> 34.120.190.55  HTTPS    [Telemetry Data Upload]",
            "Servidor de Telemetria",
        ),
        item(
            "net_googleads",
            Traffic,
            Surveillance,
            "3   2.100  192.168.1.10 -> 172.217.1.174  QUIC     [Google Ads Fetch]",
            "Rede de Anúncios Google",
        ),
        item(
            "net_facebook",
            Traffic,
            Dangerous,
            "4   3.450  192.168.1.10 -> 52.84.144.156  TLSv1.2  [Facebook Analytics Ping]",
            "Analytics do Facebook",
        ),
        item(
            "net_adjust",
            Traffic,
            Dangerous,
            "5   4.890  192.168.1.10 -> 84.17.41.112   HTTPS    [Adjust Tracking SDK]",
            "SDK de Rastreamento (Adjust)",
        ),
    ]
}

/// Self-protection guide of the last module.
pub fn protection_guide() -> GuideChecklist {
    GuideChecklist::new(vec![
        GuideItem::new(
            "mfa",
            "Fortaleça suas Contas: MFA e Gerenciadores de Senha",
        ),
        GuideItem::new("vpn", "Proteja sua Conexão: VPNs"),
        GuideItem::new(
            "community",
            "A Força da Comunidade: Organização e Apoio Mútuo",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let items = lab_evidence();
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_weights_per_kind() {
        let weight = |kind: EvidenceKind| {
            lab_evidence()
                .iter()
                .filter(|i| i.kind == kind)
                .map(|i| i.tag.weight())
                .sum::<u32>()
        };
        assert_eq!(weight(EvidenceKind::Permission), 7);
        assert_eq!(weight(EvidenceKind::Traffic), 6);
    }

    #[test]
    fn test_guide_starts_unchecked() {
        let guide = protection_guide();
        assert_eq!(guide.items().len(), 3);
        assert_eq!(guide.percent(), 0);
    }
}
