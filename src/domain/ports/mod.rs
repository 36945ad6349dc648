//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod codegen_events;
pub mod file_system;

pub use codegen_events::{CodegenEvent, CodegenEventSink, NoopEventSink};
pub use file_system::{DirEntry, EntryKind, FileSystem, FsError, FsResult};
