use std::{
    collections::HashSet,
    fs,
    path::PathBuf,
    sync::{LazyLock, RwLock},
};

use documented::{Documented, DocumentedFields};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;
use tracing::info;
use vane_core::{GroupPattern, Router, RouterBuilder, ScopedRepository, VaneError};

use crate::{
    annotations::{annotate_toml_array_of_tables, annotate_toml_table},
    error::{ConfigError, Result},
    project::Project,
    repository::{default_repositories, Repository},
    utils::xdg_config_home,
};

/// Application's configuration
#[derive(Clone, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct Config {
    /// Identity of the project dependencies are resolved for.
    pub project: Project,

    /// Configured repositories, in lookup priority order.
    pub repositories: Vec<Repository>,

    /// User agent sent with repository requests.
    /// Default: "vane/<version>"
    pub user_agent: Option<String>,
}

pub static CONFIG: LazyLock<RwLock<Option<Config>>> = LazyLock::new(|| RwLock::new(None));

pub static CONFIG_PATH: LazyLock<RwLock<PathBuf>> = LazyLock::new(|| {
    RwLock::new(match std::env::var("VANE_CONFIG") {
        Ok(path_str) => PathBuf::from(path_str),
        Err(_) => xdg_config_home().join("vane").join("config.toml"),
    })
});

pub fn init() -> Result<()> {
    let config = Config::new()?;
    let mut global_config = CONFIG.write().unwrap();
    *global_config = Some(config);
    Ok(())
}

fn ensure_config_initialized() {
    let mut config_guard = CONFIG.write().unwrap();
    if config_guard.is_none() {
        *config_guard = Some(Config::default_config());
    }
}

pub fn get_config() -> Config {
    {
        let config_guard = CONFIG.read().unwrap();
        if let Some(config) = config_guard.as_ref() {
            return config.clone();
        }
    }

    ensure_config_initialized();

    CONFIG.read().unwrap().as_ref().unwrap().clone()
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            project: Project {
                group: "com.example".to_string(),
                artifact: "app".to_string(),
                version: "0.1.0".to_string(),
                display_name: None,
                vendor: None,
            },
            repositories: default_repositories(),
            user_agent: None,
        }
    }

    /// Creates a new configuration by loading it from the configuration file.
    /// If the configuration file is not found, it uses the default configuration.
    pub fn new() -> Result<Self> {
        let config_path = CONFIG_PATH.read().unwrap().to_path_buf();

        let mut config = match fs::read_to_string(&config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default_config(),
            Err(err) => return Err(ConfigError::Io(err)),
        };

        config.resolve()?;

        Ok(config)
    }

    /// Validates the repository set and fills in defaults.
    ///
    /// Fatal on duplicate names, scoped repositories without groups, empty
    /// URLs, and a missing or ambiguous default repository.
    pub fn resolve(&mut self) -> Result<()> {
        let mut seen_repos = HashSet::new();
        let mut first_default: Option<String> = None;

        for repo in &mut self.repositories {
            if repo.name.trim().is_empty() {
                return Err(VaneError::EmptyRepositoryName.into());
            }
            if !seen_repos.insert(repo.name.clone()) {
                return Err(VaneError::DuplicateRepositoryName(repo.name.clone()).into());
            }
            if repo.url.trim().is_empty() {
                return Err(ConfigError::InvalidRepositoryUrl(repo.name.clone()));
            }

            repo.enabled.get_or_insert(true);

            if !repo.is_enabled() {
                continue;
            }

            if repo.is_default() {
                if let Some(first) = &first_default {
                    return Err(VaneError::MultipleDefaultRepositories {
                        first: first.clone(),
                        second: repo.name.clone(),
                    }
                    .into());
                }
                first_default = Some(repo.name.clone());
            } else if repo.groups.as_ref().map_or(true, |g| g.is_empty()) {
                return Err(VaneError::ScopedWithoutGroups(repo.name.clone()).into());
            }
        }

        if first_default.is_none() {
            return Err(ConfigError::MissingDefaultRepository);
        }

        Ok(())
    }

    /// Builds the immutable routing table from the enabled repositories,
    /// preserving declaration order.
    pub fn router(&self) -> Result<Router> {
        let mut builder = RouterBuilder::new();

        for repo in &self.repositories {
            if !repo.is_enabled() {
                continue;
            }

            if repo.is_default() {
                builder.default_repository(&repo.name, &repo.url, repo.credentials())?;
            } else {
                builder.scoped(ScopedRepository {
                    name: repo.name.clone(),
                    location: repo.url.clone(),
                    groups: repo
                        .groups
                        .clone()
                        .unwrap_or_default()
                        .into_iter()
                        .map(GroupPattern::from)
                        .collect(),
                    credentials: repo.credentials(),
                })?;
            }
        }

        Ok(builder.build())
    }

    pub fn get_repository(&self, repo_name: &str) -> Option<&Repository> {
        self.repositories
            .iter()
            .find(|repo| repo.name == repo_name && repo.is_enabled())
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("vane/{}", env!("CARGO_PKG_VERSION")))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = CONFIG_PATH.read().unwrap().to_path_buf();
        let serialized = toml::to_string_pretty(self)?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, serialized)?;
        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }

    pub fn to_annotated_document(&self) -> Result<DocumentMut> {
        use toml_edit::Item;

        let toml_string = toml::to_string_pretty(self)?;
        let mut doc = toml_string.parse::<DocumentMut>()?;

        annotate_toml_table::<Config>(doc.as_table_mut(), true)?;

        if let Some(project_item) = doc.get_mut("project") {
            if let Item::Table(project_table) = project_item {
                annotate_toml_table::<Project>(project_table, false)?;
            }
        }

        if let Some(repositories_item) = doc.get_mut("repositories") {
            if let Some(repositories_array) = repositories_item.as_array_of_tables_mut() {
                annotate_toml_array_of_tables::<Repository>(repositories_array)?;
            }
        }

        Ok(doc)
    }
}

pub fn generate_default_config() -> Result<()> {
    let config_path = CONFIG_PATH.read().unwrap().to_path_buf();

    if config_path.exists() {
        return Err(ConfigError::ConfigFileExists);
    }

    let def_config = Config::default_config();
    let annotated_doc = def_config.to_annotated_document()?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&config_path, annotated_doc.to_string())?;
    info!(
        "Default configuration file generated with documentation at: {}",
        config_path.display()
    );
    Ok(())
}
