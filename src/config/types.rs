//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Separator, TemplateMatcher, DEFAULT_EXTENSION, DEFAULT_SUPPRESS,
};

/// Template source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Directory holding the template files
    #[serde(default = "default_source_dir")]
    pub dir: PathBuf,

    /// Extension marker identifying template files
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File names containing this marker are never compiled
    #[serde(default = "default_suppress")]
    pub suppress: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
            extension: default_extension(),
            suppress: default_suppress(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("form_templates")
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_suppress() -> String {
    DEFAULT_SUPPRESS.to_string()
}

/// Bundle output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination of the compiled bundle
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub separator: Separator,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            separator: Separator::default(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("static/js/templates.js")
}

/// Watch behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Drop templates whose source file disappeared. Off by default: the last
    /// compiled form stays in the bundle until the process restarts.
    #[serde(default)]
    pub prune_missing: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

impl Config {
    /// Reject settings that would make every file a non-template.
    pub fn validate(&self) -> Result<(), String> {
        if self.source.extension.is_empty() {
            return Err("source.extension must not be empty".to_string());
        }
        Ok(())
    }

    /// Make relative paths absolute against `base`
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if self.source.dir.is_relative() {
            self.source.dir = base.join(&self.source.dir);
        }
        if self.output.path.is_relative() {
            self.output.path = base.join(&self.output.path);
        }
        self
    }

    /// File-name rule built from the source settings
    pub fn matcher(&self) -> TemplateMatcher {
        TemplateMatcher::new(&self.source.extension, &self.source.suppress)
    }
}
