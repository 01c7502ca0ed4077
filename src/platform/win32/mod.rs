// ── Win32 platform implementation ─────────────────────────────────────────────
//
// The only module in the codebase where `unsafe` code is permitted.  Every
// `unsafe` block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Nothing in this module is `pub` beyond what callers genuinely need; keep the
// unsafe surface as small as possible.

#![allow(unsafe_code)]

// ── Sub-modules ───────────────────────────────────────────────────────────────

pub mod dialogs; // modal OK/Cancel confirmation
pub mod window; // class registration, window creation, message loop, WndProc

pub(crate) mod paint; // BeginPaint/EndPaint scope guard

pub(crate) use window::Win32Platform;

/// Encode `s` as a null-terminated UTF-16 string for `PCWSTR` parameters.
pub(crate) fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_appends_single_terminator() {
        assert_eq!(wide("Hi"), vec![b'H' as u16, b'i' as u16, 0]);
        assert_eq!(wide(""), vec![0]);
    }
}
