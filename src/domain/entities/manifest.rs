//! Manifest entity and parser
//!
//! A manifest is a `pubspec.yaml`. Only three things matter here: the
//! package `name`, the optional `is_project` marker, and the
//! `flutter.assets` list.

use std::fmt;

use serde::Deserialize;

/// File name of a package manifest
pub const MANIFEST_FILE_NAME: &str = "pubspec.yaml";

/// A validated manifest: non-empty name, at least one asset pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    package_name: String,
    is_project: bool,
    asset_patterns: Vec<String>,
}

impl Manifest {
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// True for the root application; references then carry no
    /// `package/<name>/` prefix
    pub fn is_project(&self) -> bool {
        self.is_project
    }

    /// Declared asset patterns, in declaration order
    pub fn asset_patterns(&self) -> &[String] {
        &self.asset_patterns
    }
}

/// Why a manifest produced no output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The discovered path is not a regular file
    NotAFile,
    /// The content is not a YAML mapping of the expected shape
    Malformed(String),
    /// `name` absent or empty
    MissingName,
    /// `flutter.assets` absent or empty
    NoAssets,
    /// Every declared directory was empty of files
    NoDeclarations,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAFile => write!(f, "not a regular file"),
            SkipReason::Malformed(message) => write!(f, "malformed manifest: {}", message),
            SkipReason::MissingName => write!(f, "no package name"),
            SkipReason::NoAssets => write!(f, "no flutter.assets declared"),
            SkipReason::NoDeclarations => write!(f, "declared assets contain no files"),
        }
    }
}

/// Outcome of parsing raw manifest bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestParse {
    Parsed(Manifest),
    Skipped(SkipReason),
}

#[derive(Debug, Default, Deserialize)]
struct RawPubspec {
    #[serde(default)]
    name: Option<RawName>,
    #[serde(default)]
    is_project: Option<bool>,
    #[serde(default)]
    flutter: Option<RawFlutterSection>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFlutterSection {
    #[serde(default)]
    assets: Option<Vec<RawAssetEntry>>,
}

/// `name` is usually a string, but a bare number (`name: 123`) still
/// names the package
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawName {
    Text(String),
    Number(serde_yaml_ng::Number),
}

impl RawName {
    /// `None` for an empty string or a zero/NaN number
    fn into_package_name(self) -> Option<String> {
        match self {
            RawName::Text(name) if name.is_empty() => None,
            RawName::Text(name) => Some(name),
            RawName::Number(number) => match number.as_f64() {
                Some(value) if value == 0.0 || value.is_nan() => None,
                _ => Some(number.to_string()),
            },
        }
    }
}

/// `flutter.assets` entries are either plain paths or `{ path, flavors }`
/// mappings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAssetEntry {
    Path(String),
    Detailed { path: String },
}

impl RawAssetEntry {
    fn into_path(self) -> String {
        match self {
            RawAssetEntry::Path(path) | RawAssetEntry::Detailed { path } => path,
        }
    }
}

/// Parse raw manifest bytes.
///
/// Never fails: malformed content is reported as `Skipped(Malformed)`.
/// Validation order is name first, then assets.
pub fn parse_manifest(bytes: &[u8]) -> ManifestParse {
    let raw: RawPubspec = match serde_yaml_ng::from_slice::<Option<RawPubspec>>(bytes) {
        Ok(raw) => raw.unwrap_or_default(),
        Err(e) => return ManifestParse::Skipped(SkipReason::Malformed(e.to_string())),
    };

    let package_name = match raw.name.and_then(RawName::into_package_name) {
        Some(name) => name,
        None => return ManifestParse::Skipped(SkipReason::MissingName),
    };

    let asset_patterns: Vec<String> = raw
        .flutter
        .and_then(|flutter| flutter.assets)
        .unwrap_or_default()
        .into_iter()
        .map(RawAssetEntry::into_path)
        .collect();
    if asset_patterns.is_empty() {
        return ManifestParse::Skipped(SkipReason::NoAssets);
    }

    ManifestParse::Parsed(Manifest {
        package_name,
        is_project: raw.is_project.unwrap_or(false),
        asset_patterns,
    })
}
