use std::env;

use nu_ansi_term::Color::Green;
use serde_json::json;
use tracing::info;
use vane_config::{config::get_config, error::ConfigError, utils::resolve_path};
use vane_core::Coordinate;

use crate::utils::Colored;

/// Routes each coordinate's group, then fetches the artifact through the
/// eligible repositories in priority order.
pub fn fetch_artifacts(
    coordinates: &[String],
    output: Option<&str>,
    json_output: bool,
) -> miette::Result<()> {
    let config = get_config();
    let router = config.router()?;

    let dest_dir = match output {
        Some(path) => resolve_path(path)?,
        None => env::current_dir().map_err(ConfigError::Io)?,
    };

    let mut fetched = Vec::new();
    for raw in coordinates {
        let coordinate = Coordinate::try_from(raw.as_str())?;
        let eligible = router.route(&coordinate.group);
        let path = vane_dl::fetch_artifact(&eligible, &coordinate, &dest_dir)?;

        info!(
            "{} {} {}",
            Colored(Green, "Fetched"),
            coordinate,
            path.display()
        );
        fetched.push((coordinate, path));
    }

    if json_output {
        let payload: Vec<_> = fetched
            .iter()
            .map(|(coordinate, path)| {
                json!({
                    "coordinate": coordinate.to_string(),
                    "path": path.display().to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(payload));
    }

    Ok(())
}
