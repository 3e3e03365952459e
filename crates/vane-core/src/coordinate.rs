use std::{fmt, sync::OnceLock};

use regex::Regex;

use crate::error::VaneError;

/// Parsed artifact coordinate.
/// Supports format: `group:artifact:version[:classifier]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub classifier: Option<String>,
}

impl TryFrom<&str> for Coordinate {
    type Error = VaneError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static COORDINATE_RE: OnceLock<Regex> = OnceLock::new();
        let re = COORDINATE_RE.get_or_init(|| {
            Regex::new(
                r"(?x)^
            (?P<group>[^:\s/\\]+)               # dotted group namespace
            :(?P<artifact>[^:\s/\\]+)           # artifact id
            :(?P<version>[^:\s/\\]+)            # version
            (?::(?P<classifier>[^:\s/\\]+))?$   # optional classifier
            ",
            )
            .unwrap()
        });

        let value = value.trim();
        let caps = re
            .captures(value)
            .ok_or_else(|| VaneError::InvalidCoordinate(value.to_string()))?;

        Ok(Coordinate {
            group: caps["group"].to_string(),
            artifact: caps["artifact"].to_string(),
            version: caps["version"].to_string(),
            classifier: caps.name("classifier").map(|m| m.as_str().to_string()),
        })
    }
}

impl Coordinate {
    /// File name of the artifact, classifier included when present.
    pub fn file_name(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!("{}-{}-{}.jar", self.artifact, self.version, classifier),
            None => format!("{}-{}.jar", self.artifact, self.version),
        }
    }

    /// Repository-relative path of the artifact under the standard layout.
    pub fn artifact_path(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.group.replace('.', "/"),
            self.artifact,
            self.version,
            self.file_name()
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_coordinate() {
        let coord = Coordinate::try_from("org.junit.jupiter:junit-jupiter:5.9.0").unwrap();
        assert_eq!(coord.group, "org.junit.jupiter");
        assert_eq!(coord.artifact, "junit-jupiter");
        assert_eq!(coord.version, "5.9.0");
        assert!(coord.classifier.is_none());
    }

    #[test]
    fn test_parse_coordinate_with_classifier() {
        let coord = Coordinate::try_from("mezz.jei:jei-1.18.2:9.7.1.255:api").unwrap();
        assert_eq!(coord.classifier.as_deref(), Some("api"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let coord = Coordinate::try_from("  curse.maven:colytra-280200:3725170 ").unwrap();
        assert_eq!(coord.group, "curse.maven");
    }

    #[test]
    fn test_parse_rejects_missing_parts() {
        assert!(Coordinate::try_from("org.junit.jupiter").is_err());
        assert!(Coordinate::try_from("org.junit.jupiter:junit-jupiter").is_err());
        assert!(Coordinate::try_from("").is_err());
        assert!(Coordinate::try_from("a:b:c:d:e").is_err());
    }

    #[test]
    fn test_parse_rejects_path_characters() {
        assert!(Coordinate::try_from("org/junit:junit:5.9.0").is_err());
        assert!(Coordinate::try_from("org.junit:a b:5.9.0").is_err());
    }

    #[test]
    fn test_file_name() {
        let coord = Coordinate::try_from("org.apache.commons:commons-lang3:3.14.0").unwrap();
        assert_eq!(coord.file_name(), "commons-lang3-3.14.0.jar");

        let coord = Coordinate::try_from("mezz.jei:jei-1.18.2:9.7.1.255:api").unwrap();
        assert_eq!(coord.file_name(), "jei-1.18.2-9.7.1.255-api.jar");
    }

    #[test]
    fn test_artifact_path() {
        let coord = Coordinate::try_from("org.jetbrains:annotations:23.0.0").unwrap();
        assert_eq!(
            coord.artifact_path(),
            "org/jetbrains/annotations/23.0.0/annotations-23.0.0.jar"
        );
    }

    #[test]
    fn test_display_round_trip() {
        for input in [
            "org.junit.jupiter:junit-jupiter:5.9.0",
            "mezz.jei:jei-1.18.2:9.7.1.255:api",
        ] {
            let coord = Coordinate::try_from(input).unwrap();
            assert_eq!(coord.to_string(), input);
        }
    }
}
