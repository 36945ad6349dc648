#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|path: &str| {
    let symbol = flutter_assets_codegen::symbol_name(path);
    assert!(symbol.starts_with('$'));
    assert!(symbol[1..]
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_'));
});
