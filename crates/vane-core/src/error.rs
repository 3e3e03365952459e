//! Error types for vane-core.

use miette::Diagnostic;
use thiserror::Error;

/// Core error type for routing and coordinate handling.
#[derive(Error, Diagnostic, Debug)]
pub enum VaneError {
    #[error("Repository '{0}' is declared more than once")]
    #[diagnostic(
        code(vane::duplicate_repo),
        help("Rename one of the conflicting repositories")
    )]
    DuplicateRepositoryName(String),

    #[error("Repository name cannot be empty")]
    #[diagnostic(code(vane::empty_repo_name))]
    EmptyRepositoryName,

    #[error("Scoped repository '{0}' does not declare any groups")]
    #[diagnostic(
        code(vane::scoped_without_groups),
        help("List the groups the repository serves, or mark it as the default repository")
    )]
    ScopedWithoutGroups(String),

    #[error("Default repository already declared as '{first}', cannot add '{second}'")]
    #[diagnostic(
        code(vane::multiple_defaults),
        help("Only one repository may serve unclaimed groups")
    )]
    MultipleDefaultRepositories { first: String, second: String },

    #[error("Invalid artifact coordinate: {0}")]
    #[diagnostic(
        code(vane::invalid_coordinate),
        help("Use format: group:artifact:version or group:artifact:version:classifier")
    )]
    InvalidCoordinate(String),
}

pub type Result<T> = std::result::Result<T, VaneError>;
