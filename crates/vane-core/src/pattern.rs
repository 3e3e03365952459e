use std::fmt;

/// A dotted group namespace prefix.
///
/// A pattern claims its own group and every subgroup beneath it:
/// `org.example` matches `org.example` and `org.example.sub.module`, but
/// not `org.examplefoo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPattern(String);

impl GroupPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `group` equals the pattern or extends it at a dot boundary.
    pub fn matches(&self, group: &str) -> bool {
        match group.strip_prefix(self.0.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}

impl From<&str> for GroupPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for GroupPattern {
    fn from(pattern: String) -> Self {
        Self(pattern)
    }
}

impl fmt::Display for GroupPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let pattern = GroupPattern::new("org.example");
        assert!(pattern.matches("org.example"));
    }

    #[test]
    fn test_subgroup_match() {
        let pattern = GroupPattern::new("org.example");
        assert!(pattern.matches("org.example.sub"));
        assert!(pattern.matches("org.example.sub.module"));
    }

    #[test]
    fn test_no_match_without_dot_boundary() {
        let pattern = GroupPattern::new("org.example");
        assert!(!pattern.matches("org.examplefoo"));
        assert!(!pattern.matches("org.exam"));
    }

    #[test]
    fn test_no_match_unrelated_group() {
        let pattern = GroupPattern::new("org.example");
        assert!(!pattern.matches("com.example"));
        assert!(!pattern.matches(""));
    }

    #[test]
    fn test_single_segment_pattern() {
        let pattern = GroupPattern::new("mezz");
        assert!(pattern.matches("mezz"));
        assert!(pattern.matches("mezz.jei"));
        assert!(!pattern.matches("mezzanine"));
    }

    #[test]
    fn test_multi_segment_pattern_boundary() {
        let pattern = GroupPattern::new("mezz.jei");
        assert!(pattern.matches("mezz.jei.api"));
        assert!(!pattern.matches("mezz.jeiplus"));
        assert!(!pattern.matches("mezz"));
    }

    #[test]
    fn test_display() {
        let pattern = GroupPattern::from("org.apache.commons");
        assert_eq!(pattern.to_string(), "org.apache.commons");
        assert_eq!(pattern.as_str(), "org.apache.commons");
    }
}
