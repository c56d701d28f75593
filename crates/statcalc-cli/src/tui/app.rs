use crossterm::event::Event;
use ratatui::Frame;

/// Trait for full-screen applications.
///
/// Applications executed by `Tui::run()` must implement this trait.
pub trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Draws the screen (called after every handled event).
    fn draw(&self, frame: &mut Frame);
}
