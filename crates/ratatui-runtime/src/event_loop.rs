use std::io;

use crossterm::event;

use crate::event::TuiEvent;

/// Alternates between waiting for input and rendering the result.
///
/// Every terminal event marks the screen dirty, and a dirty screen is rendered before
/// the next event is read.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub fn new() -> Self {
        // Initial render is required on startup
        Self { dirty: true }
    }

    /// Returns the next event, blocking on terminal input when nothing is pending.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_is_render() {
        let mut events = EventLoop::new();
        assert!(events.next().unwrap().is_render());
        assert!(!events.dirty);
    }
}
