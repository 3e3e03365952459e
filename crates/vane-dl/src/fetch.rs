//! Ordered artifact fetching over a routing result.
//!
//! Routing decides which repositories may serve a group; this module walks
//! that list in priority order and takes the first repository that
//! actually delivers the artifact.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};
use url::Url;
use vane_core::{Coordinate, RepositoryEntry};

use crate::{error::FetchError, http::Http};

/// Joins a repository location with the artifact's standard-layout path.
pub fn artifact_url(location: &str, coordinate: &Coordinate) -> Result<Url, FetchError> {
    let mut base = location.to_string();
    // without the trailing slash, Url::join drops the last path segment
    if !base.ends_with('/') {
        base.push('/');
    }

    let base = Url::parse(&base).map_err(|source| FetchError::InvalidUrl {
        url: location.to_string(),
        source,
    })?;

    base.join(&coordinate.artifact_path())
        .map_err(|source| FetchError::InvalidUrl {
            url: location.to_string(),
            source,
        })
}

/// Fetches `coordinate` through the eligible repositories in order,
/// writing the artifact into `dest_dir`. The first success wins.
///
/// An empty repository list means no repository serves the coordinate's
/// group; that is reported here, not by routing.
pub fn fetch_artifact(
    repositories: &[&RepositoryEntry],
    coordinate: &Coordinate,
    dest_dir: &Path,
) -> Result<PathBuf, FetchError> {
    if repositories.is_empty() {
        return Err(FetchError::NoEligibleRepository(coordinate.group.clone()));
    }

    fs::create_dir_all(dest_dir)?;
    let dest = dest_dir.join(coordinate.file_name());

    let mut failures = Vec::new();
    for repo in repositories {
        debug!("Trying {} for {}", repo.name(), coordinate);
        match fetch_from(repo, coordinate, &dest) {
            Ok(()) => {
                debug!("Fetched {} from {}", coordinate, repo.name());
                return Ok(dest);
            }
            Err(err) => {
                warn!("{} failed for {}: {}", repo.name(), coordinate, err);
                failures.push(format!("{}: {}", repo.name(), err));
            }
        }
    }

    Err(FetchError::AllRepositoriesFailed {
        coordinate: coordinate.to_string(),
        failures,
    })
}

fn fetch_from(
    repo: &RepositoryEntry,
    coordinate: &Coordinate,
    dest: &Path,
) -> Result<(), FetchError> {
    let url = artifact_url(repo.location(), coordinate)?;

    if url.scheme() == "file" {
        let source = url
            .to_file_path()
            .map_err(|()| FetchError::NotAFilePath {
                url: url.to_string(),
            })?;
        fs::copy(&source, dest)?;
        return Ok(());
    }

    let resp = Http::get(url.as_str(), repo.credentials())?;
    if !resp.status().is_success() {
        return Err(FetchError::HttpStatus {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let mut reader = resp.into_body().into_reader();
    let mut file = fs::File::create(dest)?;
    io::copy(&mut reader, &mut file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use vane_core::{GroupPattern, Router, ScopedRepository};

    use super::*;

    fn coordinate(raw: &str) -> Coordinate {
        Coordinate::try_from(raw).unwrap()
    }

    #[test]
    fn test_artifact_url_joins_standard_layout() {
        let url = artifact_url(
            "https://repo.maven.apache.org/maven2",
            &coordinate("org.jetbrains:annotations:23.0.0"),
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://repo.maven.apache.org/maven2/org/jetbrains/annotations/23.0.0/annotations-23.0.0.jar"
        );
    }

    #[test]
    fn test_artifact_url_trailing_slash_equivalent() {
        let coord = coordinate("org.jetbrains:annotations:23.0.0");
        let with = artifact_url("https://example.com/maven/", &coord).unwrap();
        let without = artifact_url("https://example.com/maven", &coord).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_artifact_url_invalid_location() {
        let err = artifact_url("not a url", &coordinate("a.b:c:1")).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_fetch_without_eligible_repositories() {
        let dir = tempfile::tempdir().unwrap();
        let err = fetch_artifact(&[], &coordinate("com.acme:lib:1.0"), dir.path()).unwrap_err();
        assert!(matches!(
            err,
            FetchError::NoEligibleRepository(group) if group == "com.acme"
        ));
    }

    #[test]
    fn test_fetch_from_local_repository() {
        let repo_dir = tempfile::tempdir().unwrap();
        let dest_dir = tempfile::tempdir().unwrap();

        let coord = coordinate("com.acme:lib:1.0");
        let artifact_dir = repo_dir.path().join("com/acme/lib/1.0");
        fs::create_dir_all(&artifact_dir).unwrap();
        fs::write(artifact_dir.join("lib-1.0.jar"), b"jar bytes").unwrap();

        let mut builder = Router::builder();
        builder
            .scoped(ScopedRepository {
                name: "local".to_string(),
                location: format!("file://{}", repo_dir.path().display()),
                groups: vec![GroupPattern::new("com.acme")],
                credentials: None,
            })
            .unwrap();
        let router = builder.build();

        let fetched = fetch_artifact(
            &router.route("com.acme"),
            &coord,
            &dest_dir.path().join("libs"),
        )
        .unwrap();

        assert_eq!(fetched.file_name().unwrap(), "lib-1.0.jar");
        assert_eq!(fs::read(fetched).unwrap(), b"jar bytes");
    }

    #[test]
    fn test_fetch_falls_through_to_next_repository() {
        let missing_dir = tempfile::tempdir().unwrap();
        let repo_dir = tempfile::tempdir().unwrap();
        let dest_dir = tempfile::tempdir().unwrap();

        let coord = coordinate("com.acme:lib:1.0");
        let artifact_dir = repo_dir.path().join("com/acme/lib/1.0");
        fs::create_dir_all(&artifact_dir).unwrap();
        fs::write(artifact_dir.join("lib-1.0.jar"), b"jar bytes").unwrap();

        let mut builder = Router::builder();
        builder
            .scoped(ScopedRepository {
                name: "empty".to_string(),
                location: format!("file://{}", missing_dir.path().display()),
                groups: vec![GroupPattern::new("com.acme")],
                credentials: None,
            })
            .unwrap();
        builder
            .scoped(ScopedRepository {
                name: "mirror".to_string(),
                location: format!("file://{}", repo_dir.path().display()),
                groups: vec![GroupPattern::new("com.acme")],
                credentials: None,
            })
            .unwrap();
        let router = builder.build();

        let fetched = fetch_artifact(&router.route("com.acme"), &coord, dest_dir.path()).unwrap();
        assert_eq!(fs::read(fetched).unwrap(), b"jar bytes");
    }

    #[test]
    fn test_fetch_reports_all_failures() {
        let missing_dir = tempfile::tempdir().unwrap();
        let dest_dir = tempfile::tempdir().unwrap();

        let mut builder = Router::builder();
        builder
            .scoped(ScopedRepository {
                name: "empty".to_string(),
                location: format!("file://{}", missing_dir.path().display()),
                groups: vec![GroupPattern::new("com.acme")],
                credentials: None,
            })
            .unwrap();
        let router = builder.build();

        let err = fetch_artifact(
            &router.route("com.acme"),
            &coordinate("com.acme:lib:1.0"),
            dest_dir.path(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            FetchError::AllRepositoriesFailed { ref failures, .. } if failures.len() == 1
        ));
    }
}
