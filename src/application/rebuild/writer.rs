//! Bundle writer

use std::path::PathBuf;

use crate::domain::ports::FileSystem;
use crate::error::{FormpackError, FormpackResult};

/// Writes the bundle to its destination, replacing the previous content.
#[derive(Debug, Clone)]
pub struct BundleWriter<FS: FileSystem> {
    fs: FS,
    path: PathBuf,
}

impl<FS: FileSystem> BundleWriter<FS> {
    pub fn new(fs: FS, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// Write `bundle` and return the number of bytes written.
    pub fn write(&self, bundle: &str) -> FormpackResult<usize> {
        self.fs
            .write(&self.path, bundle)
            .map_err(|e| FormpackError::Write {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        tracing::debug!(path = %self.path.display(), bytes = bundle.len(), "bundle written");
        Ok(bundle.len())
    }
}
