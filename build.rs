/// Hello Window build script.
///
/// The window backend is Win32-only. Other targets still build so that the
/// platform-independent bootstrap and handler tests can run, but the binary
/// has nothing to show there.
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        println!(
            "cargo:warning=hello-window has no window backend for \
             CARGO_CFG_TARGET_OS = {target_os:?}; the binary will exit immediately"
        );
    }

    println!("cargo:rerun-if-changed=build.rs");
}
