//! FileSystem port - abstraction over the I/O the pipeline needs
//!
//! The domain and application layers never touch the disk directly; they
//! go through this trait so the pipeline can run against the local disk
//! (`LocalFs`) or an in-memory tree (`MemoryFs`). Every method is a
//! suspension point for the cooperative scheduler.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Error, Debug)]
pub enum FsError {
    /// File not found
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Any other I/O error
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Attach the offending path to a raw I/O error
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// What a path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, fifos, devices, dangling links
    Other,
}

/// One immediate child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - tokio-backed disk access with atomic writes
/// - `MemoryFs` - in-memory tree for tests
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Classify a path
    async fn stat(&self, path: &Path) -> FsResult<EntryKind>;

    /// Read raw file content
    async fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// List the immediate entries of a directory, in the order the
    /// underlying store returns them
    async fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Replace the file at `path` with `content`, creating parent directories
    async fn write(&self, path: &Path, content: &str) -> FsResult<()>;
}

#[async_trait]
impl<T: FileSystem + ?Sized> FileSystem for &T {
    async fn stat(&self, path: &Path) -> FsResult<EntryKind> {
        (**self).stat(path).await
    }

    async fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        (**self).read(path).await
    }

    async fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        (**self).read_dir(path).await
    }

    async fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content).await
    }
}
