// ── Main window event handler ─────────────────────────────────────────────────
//
// Pure dispatch over event kinds.  The only chain across invocations is
// Close → confirm → destroy → Destroy → post quit; nothing is remembered
// between calls.

use log::{debug, trace};

use crate::{
    config::WindowConfig,
    platform::{Disposition, Event, EventHandler, WindowOps},
};

/// Handler bound to the main window class.
pub(crate) struct MainWindow {
    config: WindowConfig,
}

impl MainWindow {
    pub(crate) fn new(config: WindowConfig) -> Self {
        Self { config }
    }
}

impl EventHandler for MainWindow {
    fn handle(&self, window: &mut dyn WindowOps, event: Event) -> Disposition {
        match event {
            Event::Close => {
                if window.confirm(&self.config.confirm_text, &self.config.confirm_caption) {
                    debug!("close confirmed, destroying window");
                    window.destroy();
                } else {
                    debug!("close cancelled");
                }
                Disposition::Handled
            }

            Event::Destroy => {
                debug!("window destroyed, posting quit ({})", self.config.quit_code);
                window.post_quit(self.config.quit_code);
                Disposition::Handled
            }

            Event::Paint => {
                window.fill_background(self.config.background);
                Disposition::Handled
            }

            Event::Other { id, wparam, lparam } => {
                trace!("forwarding message {id:#06x} (wparam {wparam:#x}, lparam {lparam:#x})");
                Disposition::Default
            }
        }
    }
}
