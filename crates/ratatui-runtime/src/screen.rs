use std::fmt;

use crossterm::event::Event;
use ratatui::Frame;

use crate::App;

/// Individual screen in the application.
///
/// Screens are kept on a [`ScreenStack`]. Only the top screen receives events, but every
/// screen is drawn from the bottom up, so a screen pushed on top can be drawn as an
/// overlay (a popup over the game, for example).
///
/// ```rust
/// use crossterm::event::Event;
/// use ratatui::Frame;
/// use ratatui_runtime::{Screen, ScreenTransition};
///
/// #[derive(Debug)]
/// struct MyScreen {}
///
/// impl Screen for MyScreen {
///     fn handle_event(&mut self, event: &Event) -> ScreenTransition {
///         ScreenTransition::Stay
///     }
///     fn draw(&self, frame: &mut Frame) {}
/// }
/// ```
pub trait Screen: fmt::Debug {
    /// Handles terminal events and returns transition.
    fn handle_event(&mut self, event: &Event) -> ScreenTransition;

    /// Renders the screen.
    fn draw(&self, frame: &mut Frame);

    /// Called once when the screen is removed from the stack (Pop or Exit).
    fn on_close(&mut self) {}
}

/// Screen transition result from event handling.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay in the current screen.
    Stay,

    /// Push a new screen on top of the current one.
    ///
    /// The current screen stays on the stack and keeps being drawn beneath it.
    Push(Box<dyn Screen>),

    /// Pop the current screen and return to the previous one.
    Pop,

    /// Close every screen, top first, and exit the application.
    Exit,
}

/// Screen stack manager that implements App.
#[derive(Debug)]
pub struct ScreenStack<'a> {
    screens: Vec<Box<dyn Screen + 'a>>,
    should_exit: bool,
}

impl<'a> ScreenStack<'a> {
    /// Creates a new screen stack with an initial screen.
    #[must_use]
    pub fn new(initial: Box<dyn Screen + 'a>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    /// Number of screens currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    fn apply_transition(&mut self, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}

            ScreenTransition::Push(new_screen) => {
                self.screens.push(new_screen);
            }

            ScreenTransition::Pop => {
                if let Some(mut old_screen) = self.screens.pop() {
                    old_screen.on_close();
                }
            }

            ScreenTransition::Exit => {
                while let Some(mut screen) = self.screens.pop() {
                    screen.on_close();
                }
                self.should_exit = true;
            }
        }
    }
}

impl App for ScreenStack<'_> {
    fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.handle_event(&event);
            self.apply_transition(transition);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        for screen in &self.screens {
            screen.draw(frame);
        }
    }
}
