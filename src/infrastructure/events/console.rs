//! Console Event Sink
//!
//! Human-readable notifications. Success lines go to stdout, warnings and
//! failures to stderr. Skips are silent unless verbose.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{CodegenEvent, CodegenEventSink};

pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn new(verbose: bool) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), verbose)
    }

    pub fn with_writers<O, E>(out: O, err: E, verbose: bool) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            verbose,
        }
    }

    fn print(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
        }
    }

    fn eprint(&self, line: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", line);
        }
    }
}

impl CodegenEventSink for ConsoleEventSink {
    fn on_event(&self, event: CodegenEvent) {
        match event {
            CodegenEvent::Started {
                root,
                manifest_count,
            } => {
                if self.verbose {
                    self.print(&format!(
                        "Found {} manifest(s) in {}",
                        manifest_count,
                        root.display()
                    ));
                }
            }
            CodegenEvent::Skipped { manifest, reason } => {
                if self.verbose {
                    self.print(&format!("[{}] skipped: {}", manifest.display(), reason));
                }
            }
            CodegenEvent::Collision { package, collision } => {
                self.eprint(&format!(
                    "⚠ [{}] {} maps both '{}' and '{}'; keeping '{}'",
                    package, collision.symbol, collision.kept, collision.dropped, collision.kept
                ));
            }
            CodegenEvent::Generated {
                package,
                output,
                declarations,
                written,
            } => {
                if written {
                    self.print(&CodegenEvent::success_message(&package));
                } else {
                    self.print(&format!(
                        "[{}] would write {} ({} assets)",
                        package,
                        output.display(),
                        declarations
                    ));
                }
            }
            CodegenEvent::Failed {
                manifest,
                package,
                error,
            } => {
                self.eprint(&format!(
                    "✗ {}",
                    CodegenEvent::failure_message(&manifest, package.as_deref(), &error)
                ));
            }
            CodegenEvent::Completed {
                generated,
                skipped,
                failed,
            } => {
                if self.verbose || failed > 0 {
                    self.print(&format!(
                        "{} generated, {} skipped, {} failed",
                        generated, skipped, failed
                    ));
                }
            }
        }
    }
}
