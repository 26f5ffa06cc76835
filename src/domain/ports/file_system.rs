//! FileSystem port - abstraction over file I/O operations
//!
//! This trait lets the rebuild pipeline read template sources and write the
//! bundle without depending on a concrete implementation (local or mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Convert an `io::Error`, remembering the path it happened on.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }

    /// Back into an `io::Error` for callers that report through `std::io`.
    pub fn into_io(self) -> std::io::Error {
        match self {
            FsError::Io(err) => err,
            FsError::NotFound(_) => {
                std::io::Error::new(std::io::ErrorKind::NotFound, self.to_string())
            }
            FsError::PermissionDenied(_) => {
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, self.to_string())
            }
            FsError::Other(msg) => std::io::Error::other(msg),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory, for tests
pub trait FileSystem {
    /// Read file content as text. Invalid UTF-8 is replaced, not rejected.
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically, replacing prior content
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Regular files directly inside `dir`, sorted by path
    fn list_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;
}
