//! flutter-assets-codegen - asset manifest code generator for Flutter workspaces
//!
//! Finds every `pubspec.yaml` below a workspace root, expands the declared
//! `flutter.assets` entries into concrete files and writes an `AssetList`
//! Dart class with one constant per asset.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{generate, CodegenOptions, CodegenReport, CodegenUseCase, ManifestOutcome};
pub use config::Config;
pub use domain::entities::{parse_manifest, reference_literal, render, symbol_name, Manifest, ManifestParse};
pub use error::{CodegenError, CodegenResult};
pub use infrastructure::discover_manifests;
