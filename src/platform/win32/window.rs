// ── Main window ───────────────────────────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • Register the window class and bind it to an `EventHandler`.
//   • Create and show the top-level window.
//   • Run the Win32 message loop one message at a time.
//   • Translate WM_CLOSE, WM_DESTROY, WM_PAINT into `Event`s in WndProc and
//     hand everything else to DefWindowProcW.

#![allow(unsafe_code)]

use std::{cell::RefCell, rc::Rc};

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{GetLastError, HINSTANCE, HWND, LPARAM, LRESULT, WPARAM},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW,
            LoadCursorW, PostQuitMessage, RegisterClassExW, ShowWindow, TranslateMessage,
            CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, HMENU, IDC_ARROW, MSG, SHOW_WINDOW_CMD,
            WINDOW_EX_STYLE, WM_CLOSE, WM_DESTROY, WM_PAINT, WNDCLASSEXW, WS_OVERLAPPEDWINDOW,
        },
    },
};

use super::{dialogs, paint::PaintScope, wide};
use crate::{
    config::SystemColor,
    error::{AppError, Result},
    platform::{Disposition, Event, EventHandler, Platform, Pump, ShowCommand, WindowOps},
};

// ── Handler registry ──────────────────────────────────────────────────────────

// WndProc is a bare function pointer, so the handler bound at registration
// lives here.  One class per process, UI thread only.
thread_local! {
    static HANDLER: RefCell<Option<Rc<dyn EventHandler>>> = const { RefCell::new(None) };
}

fn current_handler() -> Option<Rc<dyn EventHandler>> {
    // Clone the Rc out so no borrow is held while the handler runs: MessageBoxW
    // pumps messages and re-enters WndProc.
    HANDLER.with(|h| h.borrow().clone())
}

// ── Platform ──────────────────────────────────────────────────────────────────

/// The Win32 implementation of `Platform` for the current process.
pub(crate) struct Win32Platform {
    hinstance: HINSTANCE,
}

impl Win32Platform {
    pub(crate) fn new() -> Result<Self> {
        // SAFETY: GetModuleHandleW(None) returns the .exe's own HMODULE, which
        // is valid for the process lifetime.
        let hmodule = unsafe { GetModuleHandleW(None) }.map_err(AppError::from)?;
        Ok(Self {
            hinstance: HINSTANCE(hmodule.0),
        })
    }
}

impl Platform for Win32Platform {
    type Window = HWND;

    fn register_class(&mut self, class_name: &str, handler: Rc<dyn EventHandler>) -> Result<()> {
        // SAFETY: LoadCursorW with IDC_ARROW loads a built-in system cursor.
        let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }.map_err(AppError::from)?;
        let class_wide = wide(class_name);

        let wndclass = WNDCLASSEXW {
            // WNDCLASSEXW is ~80 bytes; the cast to u32 is always lossless.
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            // Repaint the whole client area on resize.
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wnd_proc),
            hInstance: self.hinstance,
            hCursor: cursor,
            lpszClassName: PCWSTR(class_wide.as_ptr()),
            ..Default::default()
        };

        // Bind before registering: nothing can reach WndProc until a window
        // of this class exists.
        if HANDLER.with(|h| h.replace(Some(handler))).is_some() {
            log::warn!("replacing an already registered window handler");
        }

        // SAFETY: wndclass is fully initialised; class_wide is a valid
        // null-terminated string that Windows copies during the call.
        let atom = unsafe { RegisterClassExW(&wndclass) };
        if atom == 0 {
            return Err(last_error("RegisterClassExW"));
        }

        log::debug!("registered window class {class_name:?} (atom {atom:#06x})");
        Ok(())
    }

    fn create_window(&mut self, class_name: &str, title: &str) -> Option<HWND> {
        let class_wide = wide(class_name);
        let title_wide = wide(title);

        // SAFETY: the class was registered by `register_class`; both strings
        // outlive the call.  HWND::default() (null parent) makes a top-level
        // window and HMENU::default() means no menu.  WM_NCCREATE / WM_CREATE
        // are dispatched synchronously and only reach the handler registry.
        let created = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(0),
                PCWSTR(class_wide.as_ptr()),
                PCWSTR(title_wide.as_ptr()),
                WS_OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                HWND::default(),
                HMENU::default(),
                self.hinstance,
                None,
            )
        };

        match created {
            Ok(hwnd) if !hwnd.0.is_null() => Some(hwnd),
            Ok(_) => None,
            Err(e) => {
                log::debug!("CreateWindowExW failed: {e}");
                None
            }
        }
    }

    fn show_window(&mut self, window: HWND, show: ShowCommand) {
        // SAFETY: window was returned by CreateWindowExW and is alive.
        // The previous-visibility BOOL is intentionally ignored.
        unsafe {
            let _ = ShowWindow(window, SHOW_WINDOW_CMD(show.0));
        }
    }

    fn pump(&mut self) -> Result<Pump> {
        let mut msg = MSG::default();

        // SAFETY: &mut msg is a valid MSG pointer; HWND::default() retrieves
        // messages for all windows on this thread; 0,0 filter accepts all.
        let ret = unsafe { GetMessageW(&mut msg, HWND::default(), 0, 0) };

        match ret.0 {
            // GetMessageW returns -1 on error.
            -1 => Err(last_error("GetMessageW")),
            // 0 means WM_QUIT; wParam carries the PostQuitMessage code.
            0 => Ok(Pump::Quit(msg.wParam.0 as i32)),
            _ => {
                // SAFETY: msg was populated by a successful GetMessageW call.
                // TranslateMessage's BOOL and DispatchMessageW's LRESULT are
                // intentionally unused.
                unsafe {
                    let _ = TranslateMessage(&msg);
                    let _ = DispatchMessageW(&msg);
                }
                Ok(Pump::Dispatched)
            }
        }
    }
}

// ── Handler-facing window operations ──────────────────────────────────────────

/// `WindowOps` for the window currently inside WndProc.
struct Win32Window {
    hwnd: HWND,
}

impl WindowOps for Win32Window {
    fn confirm(&mut self, text: &str, caption: &str) -> bool {
        dialogs::confirm(self.hwnd, text, caption)
    }

    fn destroy(&mut self) {
        // SAFETY: hwnd is the window being handled; DestroyWindow sends
        // WM_DESTROY synchronously on this thread.
        if let Err(e) = unsafe { DestroyWindow(self.hwnd) } {
            log::warn!("DestroyWindow failed: {e}");
        }
    }

    fn post_quit(&mut self, exit_code: i32) {
        // SAFETY: PostQuitMessage only posts WM_QUIT to this thread's queue.
        unsafe { PostQuitMessage(exit_code) };
    }

    fn fill_background(&mut self, color: SystemColor) {
        let scope = PaintScope::begin(self.hwnd);
        scope.fill(color);
    }
}

// ── Window procedure ──────────────────────────────────────────────────────────

/// Map a raw window message to an `Event`.
fn translate_event(msg: u32, wparam: WPARAM, lparam: LPARAM) -> Event {
    match msg {
        WM_CLOSE => Event::Close,
        WM_DESTROY => Event::Destroy,
        WM_PAINT => Event::Paint,
        id => Event::Other {
            id,
            wparam: wparam.0,
            lparam: lparam.0,
        },
    }
}

// SAFETY: wnd_proc is registered as lpfnWndProc in WNDCLASSEXW.
// Windows guarantees that hwnd, msg, wparam, and lparam are valid for the
// lifetime of this call; we must not store hwnd beyond the message handler.
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let Some(handler) = current_handler() else {
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    };

    let mut window = Win32Window { hwnd };
    match handler.handle(&mut window, translate_event(msg, wparam, lparam)) {
        Disposition::Handled => LRESULT(0),
        // Default processing for everything the handler does not claim.
        Disposition::Default => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

// ── Error helpers ─────────────────────────────────────────────────────────────

/// Capture the current Win32 last-error code and wrap it in an `AppError`.
///
/// Call immediately after the failing Win32 function; `GetLastError` reads
/// thread-local state that any later API call may overwrite.
fn last_error(function: &'static str) -> AppError {
    // SAFETY: GetLastError reads thread-local state and never fails.
    let code = unsafe { GetLastError() };
    AppError::Win32 {
        function,
        code: code.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_messages_map_to_events() {
        assert_eq!(translate_event(WM_CLOSE, WPARAM(0), LPARAM(0)), Event::Close);
        assert_eq!(translate_event(WM_DESTROY, WPARAM(0), LPARAM(0)), Event::Destroy);
        assert_eq!(translate_event(WM_PAINT, WPARAM(0), LPARAM(0)), Event::Paint);
    }

    #[test]
    fn other_messages_keep_their_parameters() {
        // WM_SIZE with SIZE_RESTORED, 640 x 480.
        let ev = translate_event(0x0005, WPARAM(0), LPARAM((480 << 16) | 640));
        assert_eq!(
            ev,
            Event::Other {
                id: 0x0005,
                wparam: 0,
                lparam: (480 << 16) | 640,
            }
        );
    }
}
