//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases and event sinks (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::Cli;
pub use factory::{create_codegen_use_case, create_event_sink};
