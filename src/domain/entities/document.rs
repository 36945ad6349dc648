//! Generated document entity
//!
//! Holds the ordered, deduplicated declarations for one manifest and
//! renders them into the `AssetList` Dart class.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::identifier::Identifier;

/// Header line marking the file as generated
pub const GENERATED_HEADER: &str = "// GENERATED CODE - DO NOT MODIFY BY HAND";

/// Two different declarations that map to the same symbol name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCollision {
    pub symbol: String,
    /// Reference literal of the declaration that was kept (first seen)
    pub kept: String,
    /// Reference literal of the declaration that was dropped
    pub dropped: String,
}

/// Ordered declaration lines without duplicates
///
/// Exact duplicates are dropped silently. A different declaration reusing
/// an existing symbol is dropped too and recorded as a collision; the first
/// occurrence wins.
#[derive(Debug, Default, Clone)]
pub struct DeclarationSet {
    declarations: Vec<String>,
    literals_by_symbol: HashMap<String, String>,
    collisions: Vec<SymbolCollision>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, identifier: &Identifier) {
        match self.literals_by_symbol.get(identifier.symbol_name()) {
            Some(existing) if existing == identifier.reference_literal() => {}
            Some(existing) => self.collisions.push(SymbolCollision {
                symbol: identifier.symbol_name().to_string(),
                kept: existing.clone(),
                dropped: identifier.reference_literal().to_string(),
            }),
            None => {
                self.literals_by_symbol.insert(
                    identifier.symbol_name().to_string(),
                    identifier.reference_literal().to_string(),
                );
                self.declarations.push(identifier.declaration());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn declarations(&self) -> &[String] {
        &self.declarations
    }

    pub fn collisions(&self) -> &[SymbolCollision] {
        &self.collisions
    }
}

impl<'a> Extend<&'a Identifier> for DeclarationSet {
    fn extend<I: IntoIterator<Item = &'a Identifier>>(&mut self, iter: I) {
        for identifier in iter {
            self.push(identifier);
        }
    }
}

/// The generated `asset_list.dart` for one manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    package_name: String,
    manifest_path: PathBuf,
    output_path: PathBuf,
    declarations: Vec<String>,
    collisions: Vec<SymbolCollision>,
}

impl GeneratedDocument {
    pub fn new(
        package_name: impl Into<String>,
        manifest_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        declarations: DeclarationSet,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            manifest_path: manifest_path.into(),
            output_path: output_path.into(),
            declarations: declarations.declarations,
            collisions: declarations.collisions,
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Absolute (or workspace-rooted) path the content is written to
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn declarations(&self) -> &[String] {
        &self.declarations
    }

    pub fn collisions(&self) -> &[SymbolCollision] {
        &self.collisions
    }

    /// Full file text
    pub fn content(&self) -> String {
        render(&self.declarations)
    }
}

/// Render declaration lines into the `AssetList` class.
///
/// Declarations are separated by a blank line; there is no trailing newline.
pub fn render(declarations: &[String]) -> String {
    format!(
        "{}\n\nclass AssetList{{\n  AssetList._();\n{}\n}}",
        GENERATED_HEADER,
        declarations.join("\n\n")
    )
}
