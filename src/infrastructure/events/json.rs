//! JSON Event Sink
//!
//! Outputs codegen events as NDJSON for CI/automation consumption.

use crate::domain::ports::{CodegenEvent, CodegenEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl CodegenEventSink for JsonEventSink {
    fn on_event(&self, event: CodegenEvent) {
        let json = match event {
            CodegenEvent::Started {
                root,
                manifest_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "codegen",
                    "root": root.display().to_string(),
                    "manifest_count": manifest_count,
                })
            }

            CodegenEvent::Skipped { manifest, reason } => {
                serde_json::json!({
                    "event": "manifest_skipped",
                    "command": "codegen",
                    "manifest": manifest.display().to_string(),
                    "reason": reason.to_string(),
                })
            }

            CodegenEvent::Collision { package, collision } => {
                serde_json::json!({
                    "event": "symbol_collision",
                    "command": "codegen",
                    "package": package,
                    "symbol": collision.symbol,
                    "kept": collision.kept,
                    "dropped": collision.dropped,
                })
            }

            CodegenEvent::Generated {
                package,
                output,
                declarations,
                written,
            } => {
                serde_json::json!({
                    "event": "generated",
                    "command": "codegen",
                    "package": package,
                    "output": output.display().to_string(),
                    "declarations": declarations,
                    "written": written,
                    "message": CodegenEvent::success_message(&package),
                })
            }

            CodegenEvent::Failed {
                manifest,
                package,
                error,
            } => {
                serde_json::json!({
                    "event": "manifest_error",
                    "command": "codegen",
                    "manifest": manifest.display().to_string(),
                    "package": package,
                    "error": error,
                })
            }

            CodegenEvent::Completed {
                generated,
                skipped,
                failed,
            } => {
                let status = if failed == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": "codegen",
                    "status": status,
                    "generated": generated,
                    "skipped": skipped,
                    "errors": failed,
                })
            }
        };

        self.write_event(json);
    }
}
