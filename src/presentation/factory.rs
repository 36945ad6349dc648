//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::{CodegenOptions, CodegenUseCase};
use crate::config::Config;
use crate::domain::ports::CodegenEventSink;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs};

/// Type alias for the concrete CodegenUseCase
pub type ConcreteCodegenUseCase = CodegenUseCase<LocalFs>;

/// Create a codegen use case backed by the local file system
pub fn create_codegen_use_case(config: &Config, dry_run: bool) -> ConcreteCodegenUseCase {
    CodegenUseCase::new(
        LocalFs::new(),
        CodegenOptions {
            output: config.output.clone(),
            dry_run,
        },
    )
}

/// NDJSON on stdout for `--json`, human-readable notifications otherwise
pub fn create_event_sink(json: bool, verbose: bool) -> Box<dyn CodegenEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(verbose))
    }
}
