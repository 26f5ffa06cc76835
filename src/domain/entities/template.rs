//! Template entities
//!
//! A `TemplateFile` lives for one rescan: it is read, handed to the compiler
//! and dropped. A `CompiledTemplate` is what the registry keeps.

use std::path::{Path, PathBuf};

/// A template source file read during a rescan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Template name (file name truncated at the extension marker)
    name: String,
    /// Location on disk
    path: PathBuf,
    /// Raw file content
    raw_content: String,
}

impl TemplateFile {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        raw_content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            raw_content: raw_content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }
}

/// A successfully compiled template
///
/// The renderable form is the JavaScript snippet that registers the template
/// with the browser runtime. It is replaced as a whole, never edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    name: String,
    renderable: String,
}

impl CompiledTemplate {
    pub fn new(name: impl Into<String>, renderable: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            renderable: renderable.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Serialized renderable form, concatenated into the bundle
    pub fn renderable(&self) -> &str {
        &self.renderable
    }
}
