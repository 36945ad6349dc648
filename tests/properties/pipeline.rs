//! Property tests for the whole generate pipeline over an in-memory tree.

use std::path::PathBuf;

use proptest::prelude::*;

use flutter_assets_codegen::generate;
use flutter_assets_codegen::infrastructure::fs::MemoryFs;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn workspace(files: &[String], nested: &[String]) -> MemoryFs {
    let fs = MemoryFs::new();
    fs.add_file(
        "/ws/pkg/pubspec.yaml",
        "name: pkg\nflutter:\n  assets:\n    - assets/\n",
    );
    for name in files {
        fs.add_file(format!("/ws/pkg/assets/{}", name), "x");
    }
    for name in nested {
        fs.add_file(format!("/ws/pkg/assets/sub/{}", name), "x");
    }
    fs
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Same manifest and tree give byte-identical output.
    #[test]
    fn property_generation_is_deterministic(
        files in proptest::collection::vec("[a-z]{1,8}\\.png", 1..8)
    ) {
        let fs = workspace(&files, &[]);
        let paths = [PathBuf::from("/ws/pkg/pubspec.yaml")];

        let first = block_on(generate(&paths, &fs));
        let second = block_on(generate(&paths, &fs));

        let first = first[0].document().unwrap().content();
        let second = second[0].document().unwrap().content();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Files inside nested directories are never listed.
    #[test]
    fn property_directory_expansion_is_shallow(
        files in proptest::collection::vec("[a-z]{1,8}\\.png", 1..6),
        nested in proptest::collection::vec("[a-z]{1,8}\\.jpg", 1..6)
    ) {
        let fs = workspace(&files, &nested);

        let outcomes = block_on(generate(&[PathBuf::from("/ws/pkg/pubspec.yaml")], &fs));
        let content = outcomes[0].document().unwrap().content();

        prop_assert!(!content.contains("assets/sub/"));
        for name in &files {
            let expected = format!("'package/pkg/assets/{}'", name);
            prop_assert!(content.contains(&expected));
        }
    }
}
