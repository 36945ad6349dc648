//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `events/` - Event sinks (Console, JSON)
//! - `discovery` - Workspace manifest search

pub mod discovery;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use discovery::discover_manifests;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{LocalFs, MemoryFs};
