//! Resolved asset entity

use std::fmt;

/// One concrete file, relative to the manifest directory, produced by
/// expanding a declared asset pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedAsset(String);

impl ResolvedAsset {
    /// A pattern that named a file directly; the literal is kept as written
    pub fn file(pattern: &str) -> Self {
        Self(pattern.to_string())
    }

    /// A file found one level below a directory pattern
    pub fn in_directory(pattern: &str, entry_name: &str) -> Self {
        let dir = pattern.trim_end_matches(['/', '\\']);
        if dir.is_empty() {
            Self(entry_name.to_string())
        } else {
            Self(format!("{}/{}", dir, entry_name))
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
