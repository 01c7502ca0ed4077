// ── Window configuration ──────────────────────────────────────────────────────
//
// The fixed identity and behaviour of the single window.  Nothing is read
// from disk or the environment; `WindowConfig::default()` is the only source.
// The type is serde-serializable so that startup can log it as one JSON line.

use serde::{Deserialize, Serialize};

/// A system colour index usable as a flat background.
///
/// Values match the Win32 `COLOR_*` indices passed to `GetSysColor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum SystemColor {
    /// `COLOR_WINDOW`: the default window background.
    Window,
    /// `COLOR_BTNFACE`: dialog / 3-D face colour.
    ButtonFace,
    /// `COLOR_APPWORKSPACE`: MDI client background.
    AppWorkspace,
}

impl SystemColor {
    /// The Win32 system colour index.
    pub(crate) fn index(self) -> i32 {
        match self {
            Self::Window => 5,
            Self::ButtonFace => 15,
            Self::AppWorkspace => 12,
        }
    }
}

/// Everything that varies between "this window" and "some other window".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WindowConfig {
    /// Window class name; must be unique within the process.
    pub(crate) class_name: String,
    /// Title bar text.
    pub(crate) title: String,
    /// Body of the close confirmation prompt.
    pub(crate) confirm_text: String,
    /// Caption of the close confirmation prompt.
    pub(crate) confirm_caption: String,
    /// Colour used to fill the invalidated region on paint.
    pub(crate) background: SystemColor,
    /// Exit code posted with the quit message when the window is destroyed.
    pub(crate) quit_code: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            class_name: "My Window Class".to_owned(),
            title: "Learn to Program Windows".to_owned(),
            confirm_text: "Are you sure you would like to quit?".to_owned(),
            confirm_caption: "Exit Application".to_owned(),
            background: SystemColor::Window,
            quit_code: 0,
        }
    }
}

impl WindowConfig {
    /// One-line JSON rendering for the startup log.
    pub(crate) fn to_log_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    }
}
