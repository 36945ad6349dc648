//! Codegen Result
//!
//! Per-manifest outcomes and the run summary.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::entities::{GeneratedDocument, SkipReason};
use crate::error::CodegenError;

/// A manifest whose pipeline failed
#[derive(Debug)]
pub struct ManifestFailure {
    pub manifest: PathBuf,
    /// Known once the manifest parsed
    pub package: Option<String>,
    /// Every error that contributed; resolution reports one per failing pattern
    pub errors: Vec<CodegenError>,
}

impl ManifestFailure {
    pub fn new(manifest: &Path, package: Option<&str>, errors: Vec<CodegenError>) -> Self {
        Self {
            manifest: manifest.to_path_buf(),
            package: package.map(str::to_string),
            errors,
        }
    }
}

impl fmt::Display for ManifestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

/// What happened to one manifest
#[derive(Debug)]
pub enum ManifestOutcome {
    Generated(GeneratedDocument),
    Skipped { manifest: PathBuf, reason: SkipReason },
    Failed(ManifestFailure),
}

impl ManifestOutcome {
    pub fn manifest(&self) -> &Path {
        match self {
            ManifestOutcome::Generated(doc) => doc.manifest_path(),
            ManifestOutcome::Skipped { manifest, .. } => manifest,
            ManifestOutcome::Failed(failure) => &failure.manifest,
        }
    }

    pub fn document(&self) -> Option<&GeneratedDocument> {
        match self {
            ManifestOutcome::Generated(doc) => Some(doc),
            _ => None,
        }
    }
}

/// Summary of a full run
#[derive(Debug, Default)]
pub struct CodegenReport {
    /// Output files written (or that would be written in a dry run)
    pub generated: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    pub failed: Vec<ManifestFailure>,
}

impl CodegenReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
