use std::io;

use crossterm::event::{self, Event};

/// Events processed by the runner.
#[derive(Debug, Clone)]
pub(super) enum TuiEvent {
    /// The screen is out of date and must be redrawn.
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(Event),
}

/// Event-driven loop: renders once on startup and once after each terminal event.
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
        Self { dirty: true }
    }

    /// Returns the next event, blocking until a terminal event arrives
    /// when there is nothing left to render.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(TuiEvent::Crossterm(event))
    }
}
