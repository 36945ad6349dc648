//! Application Layer
//!
//! Use cases that wire domain logic to the ports.

mod codegen;
mod result;

pub use codegen::{generate, CodegenOptions, CodegenUseCase};
pub use result::{CodegenReport, ManifestFailure, ManifestOutcome};
