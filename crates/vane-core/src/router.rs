//! Priority-ordered routing of dependency groups to repositories.
//!
//! Repositories are declared in two flavors: scoped repositories claim a
//! set of group prefixes and serve nothing else, while the single default
//! repository serves every group no scoped repository claims. Declaration
//! order defines lookup priority, except that the default repository is
//! always consulted last.

use std::fmt;

use crate::{
    error::{Result, VaneError},
    pattern::GroupPattern,
};

/// Opaque credential pair forwarded to the artifact fetcher.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// How a repository decides which groups it serves.
#[derive(Debug, Clone)]
enum Scope {
    /// Serves only groups matching one of the listed patterns.
    Scoped(Vec<GroupPattern>),
    /// Serves any group matching none of the listed patterns.
    Default(Vec<GroupPattern>),
}

/// A repository in the routing table.
#[derive(Debug, Clone)]
pub struct RepositoryEntry {
    name: String,
    location: String,
    credentials: Option<Credentials>,
    scope: Scope,
}

impl RepositoryEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn is_default(&self) -> bool {
        matches!(self.scope, Scope::Default(_))
    }

    /// Declared inclusions for a scoped entry, derived exclusions for the
    /// default entry.
    pub fn patterns(&self) -> &[GroupPattern] {
        match &self.scope {
            Scope::Scoped(patterns) | Scope::Default(patterns) => patterns,
        }
    }

    /// Whether this repository is eligible to serve `group`.
    pub fn serves(&self, group: &str) -> bool {
        match &self.scope {
            Scope::Scoped(patterns) => patterns.iter().any(|p| p.matches(group)),
            Scope::Default(exclusions) => !exclusions.iter().any(|p| p.matches(group)),
        }
    }
}

/// Declaration of a scoped repository.
#[derive(Debug, Clone)]
pub struct ScopedRepository {
    pub name: String,
    pub location: String,
    pub groups: Vec<GroupPattern>,
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Clone)]
struct DefaultRepository {
    name: String,
    location: String,
    credentials: Option<Credentials>,
}

/// Collects repository declarations, then builds an immutable [`Router`].
///
/// Validation happens as declarations are added; [`RouterBuilder::build`]
/// cannot fail. The default repository's exclusion set is derived from all
/// scoped declarations at build time, so declaration order cannot leave a
/// claimed group visible to the default repository.
#[derive(Debug, Default)]
pub struct RouterBuilder {
    scoped: Vec<ScopedRepository>,
    default_repo: Option<DefaultRepository>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a repository restricted to the given groups.
    pub fn scoped(&mut self, repo: ScopedRepository) -> Result<&mut Self> {
        if repo.name.is_empty() {
            return Err(VaneError::EmptyRepositoryName);
        }
        self.ensure_unique(&repo.name)?;
        if repo.groups.is_empty() {
            return Err(VaneError::ScopedWithoutGroups(repo.name));
        }
        self.scoped.push(repo);
        Ok(self)
    }

    /// Declares the repository that serves every unclaimed group.
    pub fn default_repository(
        &mut self,
        name: impl Into<String>,
        location: impl Into<String>,
        credentials: Option<Credentials>,
    ) -> Result<&mut Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(VaneError::EmptyRepositoryName);
        }
        self.ensure_unique(&name)?;
        if let Some(existing) = &self.default_repo {
            return Err(VaneError::MultipleDefaultRepositories {
                first: existing.name.clone(),
                second: name,
            });
        }
        self.default_repo = Some(DefaultRepository {
            name,
            location: location.into(),
            credentials,
        });
        Ok(self)
    }

    fn ensure_unique(&self, name: &str) -> Result<()> {
        let taken = self.scoped.iter().any(|r| r.name == name)
            || self
                .default_repo
                .as_ref()
                .is_some_and(|d| d.name == name);
        if taken {
            return Err(VaneError::DuplicateRepositoryName(name.to_string()));
        }
        Ok(())
    }

    /// Builds the routing table: scoped repositories in declaration order,
    /// the default repository last with every claimed group excluded.
    pub fn build(self) -> Router {
        let mut exclusions: Vec<GroupPattern> = Vec::new();
        for repo in &self.scoped {
            for pattern in &repo.groups {
                if !exclusions.contains(pattern) {
                    exclusions.push(pattern.clone());
                }
            }
        }

        let mut entries: Vec<RepositoryEntry> = self
            .scoped
            .into_iter()
            .map(|repo| RepositoryEntry {
                name: repo.name,
                location: repo.location,
                credentials: repo.credentials,
                scope: Scope::Scoped(repo.groups),
            })
            .collect();

        if let Some(default_repo) = self.default_repo {
            entries.push(RepositoryEntry {
                name: default_repo.name,
                location: default_repo.location,
                credentials: default_repo.credentials,
                scope: Scope::Default(exclusions),
            });
        }

        Router { entries }
    }
}

/// Immutable repository routing table.
#[derive(Debug, Clone)]
pub struct Router {
    entries: Vec<RepositoryEntry>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Repositories eligible to serve `group`, in priority order.
    ///
    /// An empty result is valid; reporting an unresolvable group is the
    /// fetcher's job.
    pub fn route(&self, group: &str) -> Vec<&RepositoryEntry> {
        self.entries.iter().filter(|e| e.serves(group)).collect()
    }

    pub fn entries(&self) -> &[RepositoryEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&RepositoryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}
