//! flutter-assets-codegen CLI
//!
//! Usage: flutter-assets-codegen [ROOT] [--json] [-v...] [--dry-run] [--config PATH]

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flutter_assets_codegen::config::load_for_workspace;
use flutter_assets_codegen::discover_manifests;
use flutter_assets_codegen::presentation::{create_codegen_use_case, create_event_sink, Cli};

/// Environment variable holding a tracing filter directive
const LOG_ENV_VAR: &str = "FLUTTER_ASSETS_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let (config, warnings) = load_for_workspace(&cli.root, cli.config.as_deref())?;
    for warning in &warnings {
        match warning.line {
            Some(line) => eprintln!(
                "Warning: Unknown config key '{}' in {}:{}",
                warning.key,
                warning.file.display(),
                line
            ),
            None => eprintln!(
                "Warning: Unknown config key '{}' in {}",
                warning.key,
                warning.file.display()
            ),
        }
    }

    let manifests = discover_manifests(&cli.root, &config.excluded_segments())?;
    let use_case = create_codegen_use_case(&config, cli.dry_run);
    let sink = create_event_sink(cli.json, cli.verbose > 0);

    let report = use_case.execute(&cli.root, &manifests, sink.as_ref()).await;

    if !report.is_success() {
        bail!("codegen failed for {} manifest(s)", report.failed.len());
    }
    Ok(())
}
