//! Property tests for deduplication.

use proptest::prelude::*;

use flutter_assets_codegen::domain::entities::{DeclarationSet, Identifier};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Each declaration appears once, in first-occurrence order.
    #[test]
    fn property_dedup_keeps_first_occurrence(
        indices in proptest::collection::vec(0usize..6, 0..32)
    ) {
        let paths: Vec<String> = (0..6).map(|i| format!("assets/{}.png", i)).collect();
        let identifiers: Vec<Identifier> = indices
            .iter()
            .map(|&i| Identifier::build(&paths[i], "pkg", false))
            .collect();

        let mut set = DeclarationSet::new();
        set.extend(identifiers.iter());

        let mut expected: Vec<String> = Vec::new();
        for identifier in &identifiers {
            let line = identifier.declaration();
            if !expected.contains(&line) {
                expected.push(line);
            }
        }
        prop_assert_eq!(set.declarations(), expected.as_slice());
        prop_assert!(set.collisions().is_empty());
    }

    /// PROPERTY: Symbols in a set are unique even when paths collide.
    #[test]
    fn property_symbols_are_unique(
        paths in proptest::collection::vec("[ab][-_.][ab]", 0..16)
    ) {
        let mut set = DeclarationSet::new();
        for path in &paths {
            set.push(&Identifier::build(path, "pkg", true));
        }

        let symbols: Vec<&str> = set
            .declarations()
            .iter()
            .map(|d| d.split_whitespace().nth(2).unwrap())
            .collect();
        let mut unique = symbols.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), symbols.len());
    }
}
