#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Manifest parsing never fails, it only skips
    let _ = flutter_assets_codegen::parse_manifest(data);
});
