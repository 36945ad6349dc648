//! Configuration loading
//!
//! Everything is optional. Without a config file the generator writes
//! `lib/src/asset_list.dart` next to each manifest and skips `.symlinks`
//! directories.
//!
//! ```toml
//! # asset_codegen.toml (workspace root)
//! output = "lib/src/asset_list.dart"
//! exclude = ["build"]
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::error::{CodegenError, CodegenResult};
use crate::infrastructure::discovery::SYMLINKS_SEGMENT;

/// Config file looked up in the workspace root
pub const CONFIG_FILE_NAME: &str = "asset_codegen.toml";

/// Output path relative to each manifest directory
pub const DEFAULT_OUTPUT: &str = "lib/src/asset_list.dart";

/// Environment variable overriding `output`
pub const OUTPUT_ENV_VAR: &str = "FLUTTER_ASSETS_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generated file, relative to the manifest directory
    pub output: PathBuf,
    /// Directory names pruned from discovery, in addition to `.symlinks`
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            exclude: Vec::new(),
        }
    }
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

impl Config {
    /// Load and validate a config file
    pub fn load(path: &Path) -> CodegenResult<Self> {
        load_with_warnings(path).map(|(config, _)| config)
    }

    /// `.symlinks` followed by the configured segments, without duplicates
    pub fn excluded_segments(&self) -> Vec<String> {
        let mut segments = vec![SYMLINKS_SEGMENT.to_string()];
        for segment in &self.exclude {
            if !segments.contains(segment) {
                segments.push(segment.clone());
            }
        }
        segments
    }

    fn validate(&self, file: &Path) -> CodegenResult<()> {
        let invalid = |message: &str| CodegenError::InvalidConfig {
            file: file.to_path_buf(),
            message: message.to_string(),
        };
        if self.output.as_os_str().is_empty() {
            return Err(invalid("output must not be empty"));
        }
        if self.output.is_absolute() || self.output.has_root() {
            return Err(invalid("output must be relative to the manifest directory"));
        }
        if self
            .output
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(invalid("output must not contain '..'"));
        }
        if self.exclude.iter().any(|s| s.is_empty() || s.contains(['/', '\\'])) {
            return Err(invalid("exclude entries must be single directory names"));
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CodegenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| CodegenError::InvalidConfig {
        file: path.to_path_buf(),
        message: format!("cannot read config: {}", e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CodegenError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.validate(path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config for a workspace run.
///
/// An explicit path must exist; otherwise `<root>/asset_codegen.toml` is
/// used when present, and defaults when not. Environment overrides apply
/// last.
pub fn load_for_workspace(
    root: &Path,
    explicit: Option<&Path>,
) -> CodegenResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let candidate = root.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                load_with_warnings(&candidate)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };
    let config = with_env_overrides(config);
    config.validate(Path::new(OUTPUT_ENV_VAR))?;
    Ok((config, warnings))
}

/// Apply environment variable overrides
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(output) = std::env::var(OUTPUT_ENV_VAR) {
        if !output.trim().is_empty() {
            config.output = PathBuf::from(output.trim());
        }
    }
    config
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let trimmed = line.trim_start();
            trimmed
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|index| index + 1)
}
