use std::{env, path::PathBuf};

use crate::error::{ConfigError, Result};

pub fn home_dir() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

pub fn xdg_config_home() -> PathBuf {
    env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Makes a path absolute, expanding a leading `~`.
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let path = path.trim();
    if path.is_empty() {
        return Err(ConfigError::InvalidPath);
    }

    let expanded = match path.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(path),
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(env::current_dir()?.join(expanded))
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::test_utils::with_env;

    #[test]
    #[serial]
    fn test_xdg_config_home_env_override() {
        with_env(&[("XDG_CONFIG_HOME", "/custom/config")], || {
            assert_eq!(xdg_config_home(), PathBuf::from("/custom/config"));
        });
    }

    #[test]
    #[serial]
    fn test_resolve_path_tilde() {
        with_env(&[("HOME", "/home/tester")], || {
            let resolved = resolve_path("~/vane/config.toml").unwrap();
            assert_eq!(resolved, PathBuf::from("/home/tester/vane/config.toml"));
        });
    }

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path("/etc/vane/config.toml").unwrap();
        assert_eq!(resolved, PathBuf::from("/etc/vane/config.toml"));
    }

    #[test]
    fn test_resolve_path_relative_is_absolutized() {
        let resolved = resolve_path("vane.toml").unwrap();
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_resolve_path_empty() {
        assert!(matches!(resolve_path("  "), Err(ConfigError::InvalidPath)));
    }
}
