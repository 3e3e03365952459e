use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};

/// Identity of the project dependencies are resolved for.
#[derive(Clone, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct Project {
    /// Group namespace the project publishes under.
    pub group: String,

    /// Artifact identifier.
    pub artifact: String,

    /// Project version.
    pub version: String,

    /// Human-readable name recorded in manifests.
    /// Default: the artifact identifier
    pub display_name: Option<String>,

    /// Vendor recorded in manifests.
    pub vendor: Option<String>,
}

impl Project {
    /// Full coordinate of the project's own artifact.
    pub fn maven_coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }

    /// Group namespace with dots replaced by slashes, as it appears in
    /// repository paths.
    pub fn group_slashed(&self) -> String {
        self.group.replace('.', "/")
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.artifact)
    }
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
    fn test_maven_coordinate() {
        assert_eq!(project().maven_coordinate(), "com.acme.tools:toolbelt:1.4.0");
    }

    #[test]
    fn test_group_slashed() {
        assert_eq!(project().group_slashed(), "com/acme/tools");
    }

    #[test]
    fn test_display_name_falls_back_to_artifact() {
        let mut project = project();
        assert_eq!(project.display_name(), "Acme Toolbelt");

        project.display_name = None;
        assert_eq!(project.display_name(), "toolbelt");
    }
}
