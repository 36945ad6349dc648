//! Codegen Event Port
//!
//! The user-visible notification surface. The use case reports what
//! happened to each manifest; sinks decide how (and whether) to show it.

use std::path::PathBuf;

use crate::domain::entities::{SkipReason, SymbolCollision};

/// Event emitted during a codegen run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodegenEvent {
    /// Run started
    Started {
        root: PathBuf,
        manifest_count: usize,
    },

    /// Manifest produced no output
    Skipped { manifest: PathBuf, reason: SkipReason },

    /// Two assets mapped to the same symbol; the later one was dropped
    Collision {
        package: String,
        collision: SymbolCollision,
    },

    /// Document generated (and written unless `written` is false)
    Generated {
        package: String,
        output: PathBuf,
        declarations: usize,
        written: bool,
    },

    /// Manifest failed to read, resolve or write
    Failed {
        manifest: PathBuf,
        package: Option<String>,
        error: String,
    },

    /// Every manifest settled
    Completed {
        generated: usize,
        skipped: usize,
        failed: usize,
    },
}

impl CodegenEvent {
    /// The success notification for a generated package
    pub fn success_message(package: &str) -> String {
        format!("[{}] Assets codegen success.", package)
    }

    /// The failure notification; falls back to the manifest path when the
    /// package name was never read
    pub fn failure_message(manifest: &std::path::Path, package: Option<&str>, error: &str) -> String {
        match package {
            Some(package) => format!("[{}] Assets codegen failed: {}", package, error),
            None => format!("[{}] Assets codegen failed: {}", manifest.display(), error),
        }
    }
}

/// Trait for receiving codegen events
///
/// Implementations:
/// - `ConsoleEventSink`: human-readable notifications
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait CodegenEventSink: Send + Sync {
    fn on_event(&self, event: CodegenEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CodegenEventSink for NoopEventSink {
    fn on_event(&self, _event: CodegenEvent) {}
}
