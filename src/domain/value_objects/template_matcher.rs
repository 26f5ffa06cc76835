//! Template file matching
//!
//! Decides which directory entries are templates and derives template names
//! from file names.

use std::path::Path;

/// Default extension marker for template files
pub const DEFAULT_EXTENSION: &str = ".form";

/// Default suppression marker (editor backup/lock files such as `#a.form#`)
pub const DEFAULT_SUPPRESS: &str = "#";

/// File-name rule for template sources
///
/// A file is a template when its name contains the extension marker and does
/// not contain the suppression marker. The template name is everything before
/// the first occurrence of the extension marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMatcher {
    extension: String,
    suppress: String,
}

impl Default for TemplateMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION, DEFAULT_SUPPRESS)
    }
}

impl TemplateMatcher {
    pub fn new(extension: impl Into<String>, suppress: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            suppress: suppress.into(),
        }
    }

    /// Check a bare file name against the rule
    pub fn matches_name(&self, file_name: &str) -> bool {
        if self.extension.is_empty() || !file_name.contains(self.extension.as_str()) {
            return false;
        }
        self.suppress.is_empty() || !file_name.contains(self.suppress.as_str())
    }

    /// Check the file-name component of a path
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| self.matches_name(n))
            .unwrap_or(false)
    }

    /// Template name for a matching file name, `None` if it does not match
    /// or the name before the marker is empty.
    pub fn template_name(&self, file_name: &str) -> Option<String> {
        if !self.matches_name(file_name) {
            return None;
        }
        let name = file_name
            .split(self.extension.as_str())
            .next()
            .unwrap_or_default();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}
