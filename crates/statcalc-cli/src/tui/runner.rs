use crate::tui::{
    App,
    event_loop::{EventLoop, TuiEvent},
};

/// Full-screen application runtime.
///
/// Owns the terminal for the duration of `run()` and restores it afterwards,
/// including when the application returns an error.
#[derive(Default, Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    /// Creates a new Tui.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the application until `app.should_exit()` returns true.
    ///
    /// - `Render`: calls `app.draw()`
    /// - `Crossterm`: calls `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&event);
                    }
                }
            }
            Ok(())
        })
    }
}
