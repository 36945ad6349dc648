//! Property tests for manifest parsing.

use proptest::prelude::*;

use flutter_assets_codegen::{parse_manifest, ManifestParse};

fn pattern() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9_./ -]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary bytes.
    #[test]
    fn property_parse_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let _ = parse_manifest(&bytes);
    }

    /// PROPERTY: Parsing never panics on arbitrary text.
    #[test]
    fn property_parse_text_never_panics(text in "(?s).{0,256}") {
        let _ = parse_manifest(text.as_bytes());
    }

    /// PROPERTY: Well-formed manifests keep name, flag and pattern order.
    #[test]
    fn property_well_formed_manifest_parses(
        name in "[a-z][a-z0-9_]{0,15}",
        is_project in any::<bool>(),
        patterns in proptest::collection::vec(pattern(), 1..6)
    ) {
        let mut yaml = format!("name: \"{}\"\nis_project: {}\nflutter:\n  assets:\n", name, is_project);
        for p in &patterns {
            yaml.push_str(&format!("    - \"{}\"\n", p));
        }

        match parse_manifest(yaml.as_bytes()) {
            ManifestParse::Parsed(manifest) => {
                prop_assert_eq!(manifest.package_name(), name.as_str());
                prop_assert_eq!(manifest.is_project(), is_project);
                prop_assert_eq!(manifest.asset_patterns(), patterns.as_slice());
            }
            ManifestParse::Skipped(reason) => {
                prop_assert!(false, "unexpected skip: {}", reason);
            }
        }
    }
}
