//! Local File System Implementation
//!
//! Implements the FileSystem port on top of `tokio::fs`. Writes go through
//! a temp file in the target directory and are renamed into place.

use std::io::Write;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::ports::{DirEntry, EntryKind, FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

fn classify(metadata: &std::fs::Metadata) -> EntryKind {
    if metadata.is_file() {
        EntryKind::File
    } else if metadata.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::Other
    }
}

/// Replace `path` atomically, creating parent directories
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;
    tmp.write_all(content)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| FsError::from_io(path, e))?;
    tmp.persist(path)
        .map_err(|e| FsError::from_io(path, e.error))?;
    Ok(())
}

#[async_trait]
impl FileSystem for LocalFs {
    async fn stat(&self, path: &Path) -> FsResult<EntryKind> {
        // Follows symlinks: a link to a file is a file
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| FsError::from_io(path, e))?;
        Ok(classify(&metadata))
    }

    async fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| FsError::from_io(path, e))
    }

    async fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let mut dir = tokio::fs::read_dir(path)
            .await
            .map_err(|e| FsError::from_io(path, e))?;

        let mut entries = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| FsError::from_io(path, e))?
        {
            let kind = match tokio::fs::metadata(entry.path()).await {
                Ok(metadata) => classify(&metadata),
                // dangling symlink
                Err(_) => EntryKind::Other,
            };
            // An undecodable name cannot become an asset key
            let name = entry.file_name().into_string().map_err(|raw| FsError::Io {
                path: entry.path(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("file name {:?} is not valid UTF-8", raw),
                ),
            })?;
            entries.push(DirEntry::new(name, kind));
        }
        Ok(entries)
    }

    async fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let target = path.to_path_buf();
        let bytes = content.as_bytes().to_vec();
        tokio::task::spawn_blocking(move || atomic_write(&target, &bytes))
            .await
            .map_err(|e| FsError::Io {
                path: path.to_path_buf(),
                source: std::io::Error::other(e),
            })?
    }
}
