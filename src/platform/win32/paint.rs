#![allow(unsafe_code)]

use windows::Win32::{
    Foundation::{HWND, RECT},
    Graphics::Gdi::{BeginPaint, EndPaint, FillRect, HBRUSH, HDC, PAINTSTRUCT},
};

use crate::config::SystemColor;

/// A `BeginPaint` … `EndPaint` bracket.
///
/// Only create one while handling `WM_PAINT`.  `EndPaint` runs on drop, so the
/// device context is released before the handler returns on every path.
pub(crate) struct PaintScope {
    hwnd: HWND,
    hdc: HDC,
    ps: PAINTSTRUCT,
}

impl PaintScope {
    pub(crate) fn begin(hwnd: HWND) -> Self {
        let mut ps = PAINTSTRUCT::default();
        // SAFETY: hwnd is the window receiving WM_PAINT; ps is a valid,
        // writable PAINTSTRUCT that outlives the matching EndPaint in Drop.
        let hdc = unsafe { BeginPaint(hwnd, &mut ps) };
        Self { hwnd, hdc, ps }
    }

    /// The region Windows asked us to redraw.
    pub(crate) fn invalid_rect(&self) -> RECT {
        self.ps.rcPaint
    }

    /// Fill the invalidated region with a system colour.
    pub(crate) fn fill(&self, color: SystemColor) {
        if self.hdc.0.is_null() {
            log::warn!("BeginPaint returned no device context; skipping fill");
            return;
        }
        let rect = self.invalid_rect();
        // SAFETY: hdc is the paint DC from BeginPaint and rect lives on the
        // stack for the call.  A system colour index + 1 is accepted by
        // FillRect in place of a real brush handle and needs no cleanup.
        unsafe {
            let _ = FillRect(self.hdc, &rect, sys_color_brush(color));
        }
    }
}

impl Drop for PaintScope {
    fn drop(&mut self) {
        // SAFETY: pairs with BeginPaint in `begin`, same hwnd and PAINTSTRUCT.
        unsafe {
            let _ = EndPaint(self.hwnd, &self.ps);
        }
    }
}

/// The pseudo-brush `(HBRUSH)(COLOR_xxx + 1)`.
fn sys_color_brush(color: SystemColor) -> HBRUSH {
    HBRUSH((color.index() as isize + 1) as *mut core::ffi::c_void)
}
