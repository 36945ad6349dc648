//! Asset resolver
//!
//! Expands the declared asset patterns of one manifest into concrete files.
//! A file pattern is itself the asset; a directory pattern yields its
//! immediate file children (never recursing).

use std::path::{Path, PathBuf};

use futures::future::join_all;
use tracing::{debug, trace};

use crate::domain::entities::ResolvedAsset;
use crate::domain::ports::{EntryKind, FileSystem};
use crate::error::ResolutionError;

/// Per-pattern result, in declaration order
pub type PatternResolution = Result<Vec<ResolvedAsset>, ResolutionError>;

/// Resolves patterns relative to one manifest directory
pub struct AssetResolver<'a, F: FileSystem> {
    fs: &'a F,
    root: &'a Path,
}

impl<'a, F: FileSystem> AssetResolver<'a, F> {
    pub fn new(fs: &'a F, root: &'a Path) -> Self {
        Self { fs, root }
    }

    /// Location of a pattern on disk. A leading `/` is relative to the
    /// manifest directory, not the filesystem root.
    pub fn pattern_path(&self, pattern: &str) -> PathBuf {
        self.root.join(pattern.trim_start_matches('/'))
    }

    /// Resolve a single pattern
    pub async fn resolve_pattern(&self, pattern: &str) -> PatternResolution {
        let path = self.pattern_path(pattern);
        let kind = self
            .fs
            .stat(&path)
            .await
            .map_err(|source| ResolutionError::Stat {
                pattern: pattern.to_string(),
                source,
            })?;

        match kind {
            EntryKind::File => {
                trace!(pattern, "asset is a file");
                Ok(vec![ResolvedAsset::file(pattern)])
            }
            EntryKind::Directory => {
                let entries =
                    self.fs
                        .read_dir(&path)
                        .await
                        .map_err(|source| ResolutionError::Stat {
                            pattern: pattern.to_string(),
                            source,
                        })?;
                let assets: Vec<ResolvedAsset> = entries
                    .iter()
                    .filter(|entry| entry.kind == EntryKind::File)
                    .map(|entry| ResolvedAsset::in_directory(pattern, &entry.name))
                    .collect();
                debug!(
                    pattern,
                    entries = entries.len(),
                    files = assets.len(),
                    "expanded asset directory"
                );
                Ok(assets)
            }
            EntryKind::Other => Err(ResolutionError::NotFileOrDirectory {
                pattern: pattern.to_string(),
                path,
            }),
        }
    }

    /// Resolve every pattern concurrently. All patterns settle; results
    /// keep the declaration order.
    pub async fn resolve_all(&self, patterns: &[String]) -> Vec<PatternResolution> {
        join_all(patterns.iter().map(|pattern| self.resolve_pattern(pattern))).await
    }
}

/// Flatten per-pattern results, or return every failure
pub fn collect_resolved(
    results: Vec<PatternResolution>,
) -> Result<Vec<ResolvedAsset>, Vec<ResolutionError>> {
    let mut assets = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(resolved) => assets.extend(resolved),
            Err(e) => errors.push(e),
        }
    }
    if errors.is_empty() {
        Ok(assets)
    } else {
        Err(errors)
    }
}
