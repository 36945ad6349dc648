//! Domain Layer
//!
//! Pure codegen logic. All I/O goes through the traits in `ports/`.
//!
//! ## Structure
//!
//! - `entities/` - Manifest, ResolvedAsset, Identifier, GeneratedDocument
//! - `services/` - AssetResolver
//! - `ports/` - FileSystem and event sink interfaces

pub mod entities;
pub mod ports;
pub mod services;
