// ── Bootstrap ─────────────────────────────────────────────────────────────────
//
// Register the class, create and show the one window, then pump events until
// the quit signal arrives.  Generic over `Platform` so the whole lifecycle can
// be driven by a scripted platform in tests.

use std::rc::Rc;

use log::{debug, info};

use crate::{
    config::WindowConfig,
    error::Result,
    handler::MainWindow,
    platform::{Platform, Pump, ShowCommand},
};

/// Run the program to completion and return the process status.
///
/// The status is always 0, including when the window could not be created:
/// that case ends the program before the loop starts and without telling the
/// user.  Errors from class registration or event retrieval propagate.
pub(crate) fn run<P: Platform>(
    platform: &mut P,
    config: &WindowConfig,
    show: ShowCommand,
) -> Result<i32> {
    debug!("window config: {}", config.to_log_line());

    let handler = Rc::new(MainWindow::new(config.clone()));
    platform.register_class(&config.class_name, handler)?;

    let Some(window) = platform.create_window(&config.class_name, &config.title) else {
        debug!("window creation failed; exiting without entering the loop");
        return Ok(0);
    };

    platform.show_window(window, show);
    info!("window {window:?} shown, entering message loop");

    loop {
        match platform.pump()? {
            Pump::Dispatched => {}
            Pump::Quit(code) => {
                debug!("quit observed (code {code})");
                break;
            }
        }
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::{
        config::SystemColor,
        error::AppError,
        platform::{Disposition, Event, EventHandler, WindowOps},
    };

    /// A single-window platform whose event queue is scripted by the test.
    ///
    /// `destroy` enqueues `Event::Destroy` and `post_quit` enqueues the quit
    /// signal, mirroring how the OS reacts to `DestroyWindow` and
    /// `PostQuitMessage`.
    #[derive(Default)]
    struct ScriptedPlatform {
        handler: Option<Rc<dyn EventHandler>>,
        registered: Vec<String>,
        fail_create: bool,
        fail_pump: bool,
        created: Vec<(String, String)>,
        shown: Vec<(u32, ShowCommand)>,
        queue: VecDeque<Queued>,
        answers: VecDeque<bool>,
        log: Vec<String>,
        pumped: usize,
        alive: bool,
    }

    enum Queued {
        Event(Event),
        Quit(i32),
    }

    struct Ops<'a> {
        queue: &'a mut VecDeque<Queued>,
        answers: &'a mut VecDeque<bool>,
        log: &'a mut Vec<String>,
        alive: &'a mut bool,
    }

    impl WindowOps for Ops<'_> {
        fn confirm(&mut self, text: &str, _caption: &str) -> bool {
            let yes = self.answers.pop_front().unwrap_or(false);
            self.log.push(format!("confirm {text:?} -> {yes}"));
            yes
        }
        fn destroy(&mut self) {
            self.log.push("destroy".into());
            *self.alive = false;
            self.queue.push_front(Queued::Event(Event::Destroy));
        }
        fn post_quit(&mut self, exit_code: i32) {
            self.log.push(format!("post_quit {exit_code}"));
            self.queue.push_back(Queued::Quit(exit_code));
        }
        fn fill_background(&mut self, color: SystemColor) {
            self.log.push(format!("fill {color:?}"));
        }
    }

    impl ScriptedPlatform {
        fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
            Self {
                queue: events.into_iter().map(Queued::Event).collect(),
                ..Default::default()
            }
        }
    }

    impl Platform for ScriptedPlatform {
        type Window = u32;

        fn register_class(&mut self, class_name: &str, handler: Rc<dyn EventHandler>) -> Result<()> {
            self.registered.push(class_name.to_owned());
            self.handler = Some(handler);
            Ok(())
        }

        fn create_window(&mut self, class_name: &str, title: &str) -> Option<u32> {
            if self.fail_create {
                return None;
            }
            self.created.push((class_name.to_owned(), title.to_owned()));
            self.alive = true;
            Some(7)
        }

        fn show_window(&mut self, window: u32, show: ShowCommand) {
            self.shown.push((window, show));
        }

        fn pump(&mut self) -> Result<Pump> {
            self.pumped += 1;
            if self.fail_pump {
                return Err(AppError::Win32 { function: "GetMessageW", code: 87 });
            }
            let next = self
                .queue
                .pop_front()
                .expect("test script ran out of events before quit");
            match next {
                Queued::Quit(code) => Ok(Pump::Quit(code)),
                Queued::Event(event) => {
                    let handler = self.handler.clone().expect("class registered");
                    let mut ops = Ops {
                        queue: &mut self.queue,
                        answers: &mut self.answers,
                        log: &mut self.log,
                        alive: &mut self.alive,
                    };
                    if handler.handle(&mut ops, event) == Disposition::Default {
                        self.log.push(format!("default {event:?}"));
                    }
                    Ok(Pump::Dispatched)
                }
            }
        }
    }

    #[test]
    fn creates_one_visible_window_with_fixed_title() {
        let mut p = ScriptedPlatform::with_events([Event::Destroy]);
        let status = run(&mut p, &WindowConfig::default(), ShowCommand::DEFAULT).unwrap();

        assert_eq!(status, 0);
        assert_eq!(p.registered, vec!["My Window Class".to_owned()]);
        assert_eq!(
            p.created,
            vec![("My Window Class".to_owned(), "Learn to Program Windows".to_owned())]
        );
        assert_eq!(p.shown, vec![(7, ShowCommand::DEFAULT)]);
    }

    #[test]
    fn confirmed_close_destroys_and_ends_loop() {
        let mut p = ScriptedPlatform::with_events([Event::Paint, Event::Close]);
        p.answers.push_back(true);

        let status = run(&mut p, &WindowConfig::default(), ShowCommand(1)).unwrap();

        assert_eq!(status, 0);
        assert!(!p.alive);
        assert_eq!(
            p.log,
            vec![
                "fill Window".to_owned(),
                "confirm \"Are you sure you would like to quit?\" -> true".to_owned(),
                "destroy".to_owned(),
                "post_quit 0".to_owned(),
            ]
        );
        assert!(p.queue.is_empty());
    }

    #[test]
    fn cancelled_close_keeps_window_and_loop_running() {
        let mut p = ScriptedPlatform::with_events([Event::Close, Event::Paint, Event::Close]);
        p.answers.extend([false, true]);

        run(&mut p, &WindowConfig::default(), ShowCommand::DEFAULT).unwrap();

        // The paint between the two closes proves the loop kept running with
        // the window alive after the first, cancelled close.
        assert_eq!(p.log[0], "confirm \"Are you sure you would like to quit?\" -> false");
        assert_eq!(p.log[1], "fill Window");
        assert_eq!(p.log[2], "confirm \"Are you sure you would like to quit?\" -> true");
        assert_eq!(p.log[3], "destroy");
        assert_eq!(p.log.iter().filter(|l| *l == "destroy").count(), 1);
    }

    #[test]
    fn creation_failure_skips_loop_and_returns_zero() {
        let mut p = ScriptedPlatform::with_events([Event::Paint]);
        p.fail_create = true;

        let status = run(&mut p, &WindowConfig::default(), ShowCommand::DEFAULT).unwrap();

        assert_eq!(status, 0);
        assert_eq!(p.pumped, 0);
        assert!(p.shown.is_empty());
        assert!(p.log.is_empty());
    }

    #[test]
    fn unhandled_events_are_forwarded_unchanged() {
        let resize = Event::Other { id: 0x0005, wparam: 0, lparam: 0x0100_0200 };
        let mut p = ScriptedPlatform::with_events([resize, Event::Destroy]);

        run(&mut p, &WindowConfig::default(), ShowCommand::DEFAULT).unwrap();

        assert_eq!(p.log, vec![format!("default {resize:?}"), "post_quit 0".to_owned()]);
        assert!(p.alive, "forwarded events must not change window state");
    }

    #[test]
    fn retrieval_error_propagates() {
        let mut p = ScriptedPlatform::default();
        p.fail_pump = true;

        let err = run(&mut p, &WindowConfig::default(), ShowCommand::DEFAULT).unwrap_err();
        assert_eq!(err.to_string(), "GetMessageW failed (error 0x00000057)");
    }
}
