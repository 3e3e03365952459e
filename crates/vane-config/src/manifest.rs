//! Jar-style manifest attributes derived from the project identity.

use chrono::Utc;

use crate::project::Project;

pub fn manifest_attributes(project: &Project) -> Vec<(String, String)> {
    let vendor = project.vendor.clone().unwrap_or_default();

    vec![
        ("Specification-Title".into(), project.artifact.clone()),
        ("Specification-Vendor".into(), vendor.clone()),
        ("Specification-Version".into(), "1".into()),
        (
            "Implementation-Title".into(),
            project.display_name().to_string(),
        ),
        ("Implementation-Version".into(), project.version.clone()),
        ("Implementation-Vendor".into(), vendor),
        (
            "Implementation-Timestamp".into(),
            Utc::now().format("%Y-%m-%dT%H:%M:%S%z").to_string(),
        ),
        ("Maven-Artifact".into(), project.maven_coordinate()),
    ]
}

pub fn render_manifest(attributes: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in attributes {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            group: "com.acme.tools".to_string(),
            artifact: "toolbelt".to_string(),
            version: "1.4.0".to_string(),
            display_name: Some("Acme Toolbelt".to_string()),
            vendor: Some("Acme Labs".to_string()),
        }
    }

    #[test]
    fn test_attributes_carry_project_identity() {
        let attrs = manifest_attributes(&project());
        let get = |key: &str| {
            attrs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };

        assert_eq!(get("Specification-Title"), "toolbelt");
        assert_eq!(get("Implementation-Title"), "Acme Toolbelt");
        assert_eq!(get("Implementation-Vendor"), "Acme Labs");
        assert_eq!(get("Maven-Artifact"), "com.acme.tools:toolbelt:1.4.0");
    }

    #[test]
    fn test_timestamp_is_iso_like() {
        let attrs = manifest_attributes(&project());
        let (_, timestamp) = attrs
            .iter()
            .find(|(k, _)| k == "Implementation-Timestamp")
            .unwrap();
        // 2024-01-02T03:04:05+0000
        assert_eq!(&timestamp[4..5], "-");
        assert_eq!(&timestamp[10..11], "T");
    }

    #[test]
    fn test_render_manifest() {
        let rendered = render_manifest(&[
            ("Specification-Title".into(), "toolbelt".into()),
            ("Specification-Version".into(), "1".into()),
        ]);
        assert_eq!(rendered, "Specification-Title: toolbelt\nSpecification-Version: 1\n");
    }
}
