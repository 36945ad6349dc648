//! Property tests for symbol names and reference literals.

use proptest::prelude::*;

use flutter_assets_codegen::{reference_literal, symbol_name};

fn asset_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._ -]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Symbol names are `$` followed by identifier characters only,
    /// never starting with an underscore.
    #[test]
    fn property_symbol_is_valid_identifier(path in "(?s).{0,64}") {
        let symbol = symbol_name(&path);

        prop_assert!(symbol.starts_with('$'));
        let body = &symbol[1..];
        prop_assert!(body.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        prop_assert!(!body.starts_with('_'));
    }

    /// PROPERTY: A leading `lib/` never changes the symbol.
    #[test]
    fn property_lib_prefix_is_transparent(path in asset_path()) {
        prop_assume!(!path.starts_with("lib/"));
        prop_assert_eq!(symbol_name(&format!("lib/{}", path)), symbol_name(&path));
    }

    /// PROPERTY: Project literals are the path, package literals are prefixed.
    #[test]
    fn property_reference_literal_prefixing(
        path in asset_path(),
        package in "[a-z][a-z0-9_]{0,15}"
    ) {
        prop_assert_eq!(reference_literal(&path, &package, true), path.clone());
        prop_assert_eq!(
            reference_literal(&path, &package, false),
            format!("package/{}/{}", package, path)
        );
    }
}
