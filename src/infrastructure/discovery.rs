//! Workspace discovery
//!
//! Finds every `pubspec.yaml` below a root. Hidden and git-ignored
//! directories are searched too; directories named after an excluded
//! segment (`.symlinks` by default) are pruned.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::domain::entities::MANIFEST_FILE_NAME;
use crate::error::{CodegenError, CodegenResult};

/// Directory segment that mirrors plugin packages as symlinks
pub const SYMLINKS_SEGMENT: &str = ".symlinks";

/// Collect manifest paths below `root`, sorted.
///
/// Entries are not stat'ed here: anything named `pubspec.yaml` is returned
/// and the pipeline decides whether it is a regular file.
pub fn discover_manifests(root: &Path, excluded_segments: &[String]) -> CodegenResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CodegenError::Discovery {
            root: root.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let excluded: Vec<String> = excluded_segments.to_vec();
    let mut manifests: Vec<PathBuf> = WalkBuilder::new(root)
        .standard_filters(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir
                && entry.depth() > 0
                && excluded
                    .iter()
                    .any(|segment| entry.file_name() == segment.as_str()))
        })
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping unreadable workspace entry: {e}");
                None
            }
        })
        .filter(|entry| entry.depth() > 0 && entry.file_name() == MANIFEST_FILE_NAME)
        .map(|entry| entry.into_path())
        .collect();

    manifests.sort();
    debug!(root = %root.display(), count = manifests.len(), "discovered manifests");
    Ok(manifests)
}
