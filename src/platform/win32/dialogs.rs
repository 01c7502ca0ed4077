// ── Message boxes ─────────────────────────────────────────────────────────────
//
// Thin wrappers around `MessageBoxW`.  Must be called on the UI thread: the
// box runs a nested modal loop that keeps dispatching to our WndProc.

#![allow(unsafe_code)]

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::HWND,
        UI::WindowsAndMessaging::{MessageBoxW, IDOK, MB_OKCANCEL},
    },
};

use super::wide;

/// Show a modal OK/Cancel box owned by `hwnd_owner`.
///
/// Returns `true` only when the user pressed OK.  Closing the box with Esc or
/// the X button counts as Cancel.
pub(crate) fn confirm(hwnd_owner: HWND, text: &str, caption: &str) -> bool {
    let text_wide = wide(text);
    let caption_wide = wide(caption);

    // SAFETY: both buffers are valid null-terminated UTF-16 strings that stay
    // allocated for the duration of the call.  hwnd_owner comes from WndProc
    // and is valid while the handler runs.
    let pressed = unsafe {
        MessageBoxW(
            hwnd_owner,
            PCWSTR(text_wide.as_ptr()),
            PCWSTR(caption_wide.as_ptr()),
            MB_OKCANCEL,
        )
    };

    pressed == IDOK
}
