use miette::Diagnostic;
use thiserror::Error;
use vane_core::VaneError;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Cannot write configuration as TOML: {0}")]
    #[diagnostic(
        code(vane_config::serialize),
        help("A configured value has no TOML representation")
    )]
    SerializeConfig(#[from] toml::ser::Error),

    #[error("Malformed configuration file: {0}")]
    #[diagnostic(
        code(vane_config::parse),
        help("Fix the reported entry, or regenerate the file with `vane defconfig`")
    )]
    ParseConfig(#[from] toml::de::Error),

    #[error("Refusing to overwrite the existing configuration file")]
    #[diagnostic(
        code(vane_config::config_exists),
        help("Delete the current config.toml first, or point --config elsewhere")
    )]
    ConfigFileExists,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Router(#[from] VaneError),

    #[error("Repository '{0}' has an empty URL")]
    #[diagnostic(code(vane_config::invalid_repository_url))]
    InvalidRepositoryUrl(String),

    #[error("No default repository configured")]
    #[diagnostic(
        code(vane_config::missing_default),
        help("Mark exactly one repository with `default = true` to serve unclaimed groups")
    )]
    MissingDefaultRepository,

    #[error("Path is empty or cannot be resolved")]
    #[diagnostic(code(vane_config::invalid_path))]
    InvalidPath,

    #[error("I/O failure: {0}")]
    #[diagnostic(code(vane_config::io))]
    Io(#[from] std::io::Error),

    #[error("Generated TOML did not parse back: {0}")]
    #[diagnostic(code(vane_config::reparse))]
    Reparse(#[from] toml_edit::TomlError),

    #[error("TOML key '{0}' carries no value")]
    #[diagnostic(code(vane_config::empty_toml_item))]
    EmptyTomlItem(String),

    #[error("Cannot annotate repository tables: {0}")]
    #[diagnostic(code(vane_config::annotate))]
    Annotate(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
