use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};
use vane_core::Credentials;

/// Defines a remote repository that can serve artifacts.
#[derive(Clone, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct Repository {
    /// Unique name of the repository.
    pub name: String,

    /// Base URL of the repository. `file://` URLs point at a local
    /// repository directory.
    pub url: String,

    /// Groups this repository serves, subgroups included.
    /// Required unless the repository is marked `default`.
    pub groups: Option<Vec<String>>,

    /// Serves every group no other repository claims.
    /// Exactly one enabled repository must set this.
    /// Default: false
    pub default: Option<bool>,

    /// Whether the repository is enabled.
    /// Default: true
    pub enabled: Option<bool>,

    /// Username sent when the repository requires authentication.
    pub username: Option<String>,

    /// Access token or password paired with `username`.
    pub token: Option<String>,
}

impl Repository {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn is_default(&self) -> bool {
        self.default.unwrap_or(false)
    }

    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.token) {
            (Some(username), Some(token)) => Some(Credentials {
                username: username.clone(),
                token: token.clone(),
            }),
            _ => None,
        }
    }
}

pub fn default_repositories() -> Vec<Repository> {
    vec![Repository {
        name: "central".to_string(),
        url: "https://repo.maven.apache.org/maven2".to_string(),
        groups: None,
        default: Some(true),
        enabled: Some(true),
        username: None,
        token: None,
    }]
}
