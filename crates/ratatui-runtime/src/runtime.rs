use std::io;

use crossterm::{
    ExecutableCommand,
    event::{DisableMouseCapture, EnableMouseCapture},
};
use tracing::warn;

use crate::{App, event::TuiEvent, event_loop::EventLoop};

/// TUI application runtime.
///
/// Manages the event loop and executes applications that implement the `App` trait.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
    mouse_capture: bool,
}

impl Runtime {
    /// Creates a new Runtime with mouse capture disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables reporting of mouse events to the application.
    #[must_use]
    pub fn mouse_capture(self, enabled: bool) -> Self {
        Self {
            mouse_capture: enabled,
            ..self
        }
    }

    /// Runs the application.
    ///
    /// Draws once, then loops until `app.should_exit()` returns true, passing each
    /// terminal event to `app.handle_event()` and drawing again afterwards.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            let _mouse = if self.mouse_capture {
                Some(MouseCapture::enable()?)
            } else {
                None
            };
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(event);
                    }
                }
            }
            Ok(())
        })
    }
}

/// Keeps mouse reporting on while alive.
#[derive(Debug)]
struct MouseCapture;

impl MouseCapture {
    fn enable() -> io::Result<Self> {
        io::stdout().execute(EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        if let Err(error) = io::stdout().execute(DisableMouseCapture) {
            warn!(%error, "failed to disable mouse capture");
        }
    }
}
