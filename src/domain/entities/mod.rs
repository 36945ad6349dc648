//! Domain Entities
//!
//! - `Manifest` - a validated `pubspec.yaml`
//! - `ResolvedAsset` - one concrete asset file
//! - `Identifier` - symbol + reference for one asset
//! - `GeneratedDocument` - the rendered `AssetList` for one manifest

mod asset;
mod document;
mod identifier;
mod manifest;

pub use asset::ResolvedAsset;
pub use document::{render, DeclarationSet, GeneratedDocument, SymbolCollision, GENERATED_HEADER};
pub use identifier::{reference_literal, symbol_name, Identifier};
pub use manifest::{parse_manifest, Manifest, ManifestParse, SkipReason, MANIFEST_FILE_NAME};
