//! Event Sink Implementations
//!
//! Provides concrete implementations of CodegenEventSink:
//! - ConsoleEventSink: human-readable notifications
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
