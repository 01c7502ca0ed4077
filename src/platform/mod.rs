// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module defines the interface the rest of the codebase uses to talk to
// the OS.  No `unsafe` lives here; all Win32 FFI is confined to the `win32`
// sub-module and never leaks outward.

use std::rc::Rc;

use crate::{config::SystemColor, error::Result};

#[cfg(windows)]
pub mod win32;

// ── Events ────────────────────────────────────────────────────────────────────

/// One event delivered to the window's handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    /// The user asked to close the window (title-bar X, Alt+F4, …).
    Close,
    /// The window is being destroyed.
    Destroy,
    /// Part of the client area needs to be redrawn.
    Paint,
    /// Anything else, carried through untouched for the default handler.
    Other { id: u32, wparam: usize, lparam: isize },
}

/// What the handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Disposition {
    /// Consumed; the platform returns 0 to the OS.
    Handled,
    /// Not ours; the platform must run its default processing.
    Default,
}

/// Initial display mode passed to `Platform::show_window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ShowCommand(pub(crate) i32);

impl ShowCommand {
    /// Use the mode the process was launched with (`SW_SHOWDEFAULT`).
    pub(crate) const DEFAULT: Self = Self(10);
}

// ── Handler side ──────────────────────────────────────────────────────────────

/// The window operations available to an event handler while it runs.
///
/// Implementations are only valid for the duration of one `handle` call.
pub(crate) trait WindowOps {
    /// Show a modal OK/Cancel prompt.  Returns `true` on OK.
    fn confirm(&mut self, text: &str, caption: &str) -> bool;

    /// Request destruction of the window.
    fn destroy(&mut self);

    /// Ask the event loop to stop once the current dispatch completes.
    fn post_quit(&mut self, exit_code: i32);

    /// Fill the invalidated region with `color`, acquiring and releasing the
    /// paint context within this call.
    fn fill_background(&mut self, color: SystemColor);
}

/// Reacts to events for windows of one registered class.
pub(crate) trait EventHandler {
    fn handle(&self, window: &mut dyn WindowOps, event: Event) -> Disposition;
}

// ── Bootstrap side ────────────────────────────────────────────────────────────

/// Result of pulling one event off the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pump {
    /// An event was retrieved and dispatched.
    Dispatched,
    /// The termination signal was observed, carrying the posted exit code.
    Quit(i32),
}

/// The process-level windowing services the bootstrap drives.
pub(crate) trait Platform {
    /// Opaque window handle.
    type Window: Copy + std::fmt::Debug;

    /// Register `class_name` with `handler` as its event handler.
    fn register_class(&mut self, class_name: &str, handler: Rc<dyn EventHandler>) -> Result<()>;

    /// Create a top-level window of default size and position.
    ///
    /// Returns `None` if the OS refused to create it.
    fn create_window(&mut self, class_name: &str, title: &str) -> Option<Self::Window>;

    /// Make `window` visible using `show`.
    fn show_window(&mut self, window: Self::Window, show: ShowCommand);

    /// Block for the next event, translate and dispatch it.
    fn pump(&mut self) -> Result<Pump>;
}
