// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except `platform::win32` (Win32 FFI).
// Each unsafe block there MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]
// Release builds run as a GUI application (no console window).
// Debug builds keep the console so log output is visible.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Without a backend the bootstrap is only reachable from tests.
#![cfg_attr(not(windows), allow(dead_code))]

mod app;
mod config;
mod error;
mod handler;
mod platform;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    std::process::exit(run());
}

/// Drive the window to completion.  The process status is always 0.
#[cfg(windows)]
fn run() -> i32 {
    use crate::{config::WindowConfig, platform::ShowCommand};

    let config = WindowConfig::default();
    let result = platform::win32::Win32Platform::new()
        .and_then(|mut win32| app::run(&mut win32, &config, ShowCommand::DEFAULT));

    match result {
        Ok(status) => status,
        Err(e) => {
            log::error!("{e}");
            0
        }
    }
}

#[cfg(not(windows))]
fn run() -> i32 {
    log::error!("no window backend for this platform");
    0
}
