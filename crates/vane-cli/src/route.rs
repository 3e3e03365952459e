use nu_ansi_term::Color::{Blue, Cyan, Green};
use serde_json::json;
use tracing::{info, warn};
use vane_config::config::get_config;

use crate::utils::Colored;

/// Prints the repositories eligible to serve `group`, in priority order.
pub fn route_group(group: &str, json_output: bool) -> miette::Result<()> {
    let config = get_config();
    let router = config.router()?;
    let entries = router.route(group);

    if json_output {
        let payload: Vec<_> = entries
            .iter()
            .map(|entry| {
                json!({
                    "name": entry.name(),
                    "url": entry.location(),
                    "default": entry.is_default(),
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(payload));
        return Ok(());
    }

    if entries.is_empty() {
        warn!("No repository serves group '{}'", group);
        return Ok(());
    }

    for (idx, entry) in entries.iter().enumerate() {
        let marker = if entry.is_default() { " (default)" } else { "" };
        info!(
            "{} {}{} {}",
            Colored(Cyan, format!("{}.", idx + 1)),
            entry.name(),
            marker,
            Colored(Blue, entry.location())
        );
    }

    Ok(())
}

/// Prints every configured repository with its scope.
pub fn list_repositories(json_output: bool) -> miette::Result<()> {
    let config = get_config();

    if json_output {
        let payload: Vec<_> = config
            .repositories
            .iter()
            .map(|repo| {
                json!({
                    "name": repo.name,
                    "url": repo.url,
                    "groups": repo.groups,
                    "default": repo.is_default(),
                    "enabled": repo.is_enabled(),
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(payload));
        return Ok(());
    }

    for repo in &config.repositories {
        let scope = if repo.is_default() {
            "serves unclaimed groups".to_string()
        } else {
            repo.groups
                .clone()
                .unwrap_or_default()
                .join(", ")
        };
        let state = if repo.is_enabled() {
            Colored(Green, "enabled")
        } else {
            Colored(Cyan, "disabled")
        };

        info!(
            "{} [{}] {} {}",
            repo.name,
            state,
            Colored(Blue, &repo.url),
            scope
        );
    }

    Ok(())
}
