//! Rebuild options

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::value_objects::{Separator, TemplateMatcher};

/// What to scan and where to write
#[derive(Debug, Clone)]
pub struct RebuildOptions {
    /// Directory holding the template files
    pub source: PathBuf,
    /// Bundle destination
    pub output: PathBuf,
    pub matcher: TemplateMatcher,
    pub separator: Separator,
    /// Drop registry entries whose source file is gone
    pub prune_missing: bool,
}

impl RebuildOptions {
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            matcher: TemplateMatcher::default(),
            separator: Separator::default(),
            prune_missing: false,
        }
    }

    /// Options taken from an already resolved config
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.source.dir, &config.output.path)
            .with_matcher(config.matcher())
            .with_separator(config.output.separator)
            .with_prune_missing(config.watch.prune_missing)
    }

    pub fn with_matcher(mut self, matcher: TemplateMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_prune_missing(mut self, prune_missing: bool) -> Self {
        self.prune_missing = prune_missing;
        self
    }
}
