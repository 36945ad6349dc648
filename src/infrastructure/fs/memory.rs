//! In-memory File System
//!
//! A small tree held behind `Arc<Mutex<_>>` so clones share state.
//! Directory listings come back in insertion order.

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{DirEntry, EntryKind, FileSystem, FsError, FsResult};

#[derive(Debug, Clone)]
enum Node {
    File(Vec<u8>),
    Dir(Vec<String>),
    Other,
}

impl Node {
    fn kind(&self) -> EntryKind {
        match self {
            Node::File(_) => EntryKind::File,
            Node::Dir(_) => EntryKind::Directory,
            Node::Other => EntryKind::Other,
        }
    }
}

#[derive(Debug, Default)]
struct Tree {
    nodes: HashMap<PathBuf, Node>,
    read_only: HashSet<PathBuf>,
}

/// In-memory file system for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    tree: Arc<Mutex<Tree>>,
}

fn key(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

impl Tree {
    fn ensure_dir(&mut self, dir: &Path) {
        if matches!(self.nodes.get(dir), Some(Node::Dir(_))) {
            return;
        }
        self.nodes.insert(dir.to_path_buf(), Node::Dir(Vec::new()));
        self.link(dir);
    }

    /// Register `path` in its parent's listing
    fn link(&mut self, path: &Path) {
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return;
        };
        self.ensure_dir(parent);
        let name = name.to_string_lossy().into_owned();
        if let Some(Node::Dir(children)) = self.nodes.get_mut(parent) {
            if !children.contains(&name) {
                children.push(name);
            }
        }
    }

    fn insert(&mut self, path: &Path, node: Node) {
        self.nodes.insert(path.to_path_buf(), node);
        self.link(path);
    }
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tree> {
        // A poisoned lock only means another test thread panicked
        self.tree.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Add a file, creating parent directories
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = key(path.as_ref());
        self.lock().insert(&path, Node::File(content.as_ref().to_vec()));
    }

    /// Add an empty directory
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = key(path.as_ref());
        self.lock().ensure_dir(&path);
    }

    /// Add an entry that is neither a file nor a directory
    pub fn add_other(&self, path: impl AsRef<Path>) {
        let path = key(path.as_ref());
        self.lock().insert(&path, Node::Other);
    }

    /// Make writes to `path` fail with `PermissionDenied`
    pub fn deny_writes(&self, path: impl AsRef<Path>) {
        let path = key(path.as_ref());
        self.lock().read_only.insert(path);
    }

    /// Current content of a file, if it exists and is UTF-8
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.lock().nodes.get(&key(path.as_ref())) {
            Some(Node::File(bytes)) => String::from_utf8(bytes.clone()).ok(),
            _ => None,
        }
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.lock().nodes.contains_key(&key(path.as_ref()))
    }
}

fn not_a(kind: &str, path: &Path) -> FsError {
    FsError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::other(format!("not a {}", kind)),
    }
}

#[async_trait]
impl FileSystem for MemoryFs {
    async fn stat(&self, path: &Path) -> FsResult<EntryKind> {
        self.lock()
            .nodes
            .get(&key(path))
            .map(Node::kind)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    async fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        match self.lock().nodes.get(&key(path)) {
            Some(Node::File(bytes)) => Ok(bytes.clone()),
            Some(_) => Err(not_a("file", path)),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    async fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let tree = self.lock();
        let dir = key(path);
        match tree.nodes.get(&dir) {
            Some(Node::Dir(children)) => Ok(children
                .iter()
                .map(|name| {
                    let kind = tree
                        .nodes
                        .get(&dir.join(name))
                        .map(Node::kind)
                        .unwrap_or(EntryKind::Other);
                    DirEntry::new(name.clone(), kind)
                })
                .collect()),
            Some(_) => Err(not_a("directory", path)),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    async fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let target = key(path);
        let mut tree = self.lock();
        if tree.read_only.contains(&target) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        if matches!(tree.nodes.get(&target), Some(Node::Dir(_))) {
            return Err(not_a("file", path));
        }
        tree.insert(&target, Node::File(content.as_bytes().to_vec()));
        Ok(())
    }
}
