/// winshim build script.
///
/// Role: surface non-Windows targets early. The exported surface only exists
/// on Windows; other targets still build the portable core (`rect`, `error`)
/// so the test suite runs everywhere, but a warning makes the situation
/// visible instead of silently producing an export-less library.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        println!(
            "cargo:warning=winshim compiles its exports only for Windows \
             (CARGO_CFG_TARGET_OS = {target_os:?}); building the portable core only"
        );
    }

    // Only re-run the build script when it changes.
    println!("cargo:rerun-if-changed=build.rs");
}
