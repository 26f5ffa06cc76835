//! Rebuild and check results

use std::path::PathBuf;

use crate::error::FormpackError;

/// A template that could not be read or compiled during a pass
#[derive(Debug)]
pub struct TemplateFailure {
    pub name: String,
    pub path: PathBuf,
    pub error: FormpackError,
}

impl TemplateFailure {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, error: FormpackError) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            error,
        }
    }
}

/// Outcome of one `rebuild_all()` pass
#[derive(Debug, Default)]
pub struct RebuildReport {
    /// Templates compiled successfully in this pass
    pub compiled: Vec<String>,
    /// Templates that failed to read or compile
    pub failures: Vec<TemplateFailure>,
    /// Failed templates whose previous compiled form is still bundled
    pub retained: Vec<String>,
    /// Templates dropped because their file disappeared
    pub pruned: Vec<String>,
    /// Templates in the bundle
    pub templates: usize,
    /// Bundle size when the write succeeded
    pub bytes_written: Option<usize>,
    /// Write failure message; the pass itself still succeeds
    pub write_error: Option<String>,
}

impl RebuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.write_error.is_none()
    }

    pub fn was_written(&self) -> bool {
        self.bytes_written.is_some()
    }
}

/// Outcome of a compile-only pass
#[derive(Debug, Default)]
pub struct CheckReport {
    pub checked: Vec<String>,
    pub failures: Vec<TemplateFailure>,
}

impl CheckReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.checked.len() + self.failures.len()
    }
}
