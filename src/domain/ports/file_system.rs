//! FileSystem port - abstraction over the file operations the lifecycle needs
//!
//! Errors are discriminated by kind so callers can tell a benign race
//! (already exists, already gone) from a real failure.

use std::io;
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
    /// Something already exists at the path
    AlreadyExists(PathBuf),
    /// Any other I/O error
    Io { path: PathBuf, source: io::Error },
}

impl FsError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(path),
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path),
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path),
            _ => FsError::Io { path, source: err },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, FsError::AlreadyExists(_))
    }
}

impl From<io::Error> for FsError {
    fn from(err: io::Error) -> Self {
        FsError::from_io(err, Path::new(""))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::AlreadyExists(path) => write!(f, "Already exists: {}", path.display()),
            FsError::Io { path, source } => {
                write!(f, "I/O error at {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileSystem: Send + Sync {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Read raw file content
    fn read_bytes(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Check if anything exists at the path (following symlinks)
    fn exists(&self, path: &Path) -> bool;

    /// Size in bytes, `None` when the file does not exist
    fn size(&self, path: &Path) -> FsResult<Option<u64>>;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Create `link` pointing at `original`; fails with `AlreadyExists` if `link` is taken
    fn symlink(&self, original: &Path, link: &Path) -> FsResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy `from` over `to` so readers never observe a partial file
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()>;
}
