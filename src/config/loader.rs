//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Separator;
use crate::error::{FormpackError, FormpackResult};

use super::types::Config;

/// Project config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "formpack.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FormpackResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FormpackError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate().map_err(|message| FormpackError::Config {
        file: path.to_path_buf(),
        message,
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Explicit `--config` path or `formpack.toml` in the working directory
    File(PathBuf),
    /// `~/.config/formpack/config.toml`
    User(PathBuf),
    Defaults,
}

/// Resolve the effective configuration.
///
/// Priority: explicit path, project `formpack.toml`, user config, defaults.
/// Environment overrides are applied on top. A config file that exists but
/// fails to parse is an error.
pub fn load_config(
    explicit: Option<&Path>,
    project_dir: &Path,
) -> FormpackResult<(Config, ConfigOrigin, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(FormpackError::Config {
                file: path.to_path_buf(),
                message: "file does not exist".to_string(),
            });
        }
    }

    let candidates: Vec<(PathBuf, bool)> = match explicit {
        Some(path) => vec![(path.to_path_buf(), false)],
        None => {
            let mut c = vec![(project_dir.join(CONFIG_FILE_NAME), false)];
            if let Some(user_dir) = dirs::config_dir() {
                c.push((user_dir.join("formpack").join("config.toml"), true));
            }
            c
        }
    };

    for (path, is_user) in candidates {
        if path.exists() {
            let (config, warnings) = load_with_warnings(&path)?;
            let origin = if is_user {
                ConfigOrigin::User(path)
            } else {
                ConfigOrigin::File(path)
            };
            return Ok((with_env_overrides(config), origin, warnings));
        }
    }

    Ok((
        with_env_overrides(Config::default()),
        ConfigOrigin::Defaults,
        Vec::new(),
    ))
}

/// Apply environment variable overrides (FORMPACK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(dir) = get_env("FORMPACK_SOURCE") {
        config.source.dir = PathBuf::from(dir);
    }

    if let Some(ext) = get_env("FORMPACK_EXTENSION") {
        if ext.is_empty() {
            tracing::warn!("ignoring empty FORMPACK_EXTENSION");
        } else {
            config.source.extension = ext;
        }
    }

    if let Some(suppress) = get_env("FORMPACK_SUPPRESS") {
        config.source.suppress = suppress;
    }

    if let Some(output) = get_env("FORMPACK_OUTPUT") {
        config.output.path = PathBuf::from(output);
    }

    if let Some(sep) = get_env("FORMPACK_SEPARATOR") {
        match sep.parse::<Separator>() {
            Ok(sep) => config.output.separator = sep,
            Err(e) => tracing::warn!("ignoring FORMPACK_SEPARATOR: {e}"),
        }
    }

    if let Some(val) = get_env("FORMPACK_PRUNE_MISSING") {
        config.watch.prune_missing = val.to_lowercase() == "true" || val == "1";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "dir",
        "extension",
        "suppress",
        "output",
        "path",
        "separator",
        "watch",
        "prune_missing",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
