//! Config resolution shared by every command

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use formpack::config::{load_config, Config, ConfigOrigin};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Command-line values that take priority over config and environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub prune_missing: bool,
}

/// Load config (file, then `FORMPACK_*`, then CLI flags) with paths made
/// absolute against the working directory.
pub fn load_project_config(
    explicit: Option<&Path>,
    overrides: Overrides,
    ui: &UiContext,
) -> Result<Config> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (config, origin, warnings) = load_config(explicit, &cwd)?;

    match &origin {
        ConfigOrigin::File(path) | ConfigOrigin::User(path) => {
            tracing::debug!(path = %path.display(), "loaded config")
        }
        ConfigOrigin::Defaults => tracing::debug!("no config file, using defaults"),
    }
    for warning in &warnings {
        tracing::warn!("{warning}");
        if !ui.json {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(ui.color, ui.unicode),
                warning
            );
        }
    }

    Ok(apply_overrides(config, overrides).resolve_paths(&cwd))
}

fn apply_overrides(mut config: Config, overrides: Overrides) -> Config {
    if let Some(source) = overrides.source {
        config.source.dir = source;
    }
    if let Some(output) = overrides.output {
        config.output.path = output;
    }
    if overrides.prune_missing {
        config.watch.prune_missing = true;
    }
    config
}
