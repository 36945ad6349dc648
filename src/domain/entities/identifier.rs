//! Identifier builder
//!
//! Turns one resolved asset path into a Dart symbol and the string the
//! symbol refers to.
//!
//! Edge cases:
//! - only a leading `lib/` is stripped from the symbol, never an inner one
//! - a leading `/` becomes `_` and is then stripped with the other
//!   leading underscores
//! - `\` separators become `_` in the symbol and stay verbatim in the literal
//! - any non-ASCII character becomes `_`

/// A generated symbol plus the asset key it refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    symbol_name: String,
    reference_literal: String,
}

impl Identifier {
    /// Build the identifier for `relative_path` owned by `package_name`
    pub fn build(relative_path: &str, package_name: &str, is_project: bool) -> Self {
        Self {
            symbol_name: symbol_name(relative_path),
            reference_literal: reference_literal(relative_path, package_name, is_project),
        }
    }

    pub fn symbol_name(&self) -> &str {
        &self.symbol_name
    }

    pub fn reference_literal(&self) -> &str {
        &self.reference_literal
    }

    /// Render the `static const` line for this identifier
    pub fn declaration(&self) -> String {
        format!(
            "  static const {} = '{}';",
            self.symbol_name,
            escape_dart_literal(&self.reference_literal)
        )
    }
}

/// `lib/assets/icon.png` -> `$assets_icon_png`
pub fn symbol_name(relative_path: &str) -> String {
    let stem = relative_path.strip_prefix("lib/").unwrap_or(relative_path);
    let replaced: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("${}", replaced.trim_start_matches('_'))
}

/// Project manifests reference assets directly; packages go through
/// `package/<name>/`
pub fn reference_literal(relative_path: &str, package_name: &str, is_project: bool) -> String {
    if is_project {
        relative_path.to_string()
    } else {
        format!("package/{}/{}", package_name, relative_path)
    }
}

/// Escape characters that would end or interpolate a single-quoted Dart string
fn escape_dart_literal(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());
    for c in literal.chars() {
        match c {
            '\\' | '\'' | '$' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
