//! Front-end independent calculator actions.
//!
//! A front-end implements [`CalculatorView`] and forwards user actions to
//! [`perform`], which reads the input, runs the calculation and writes one
//! result line back.

use statcalc_stats::Statistic;

/// Capabilities a front-end offers to the calculator.
pub trait CalculatorView {
    /// Returns the raw text currently in the input field.
    fn read_input(&self) -> String;

    /// Replaces the result panel with `text`.
    fn show_result(&mut self, text: &str);

    /// Clears both the input field and the result panel.
    fn clear(&mut self);
}

/// A user action on the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Echo the current input back to the result panel.
    Done,
    /// Clear the input and the result.
    Reset,
    /// Compute a statistic of the current input.
    Calculate(Statistic),
}

pub fn perform<V>(view: &mut V, action: Action)
where
    V: CalculatorView + ?Sized,
{
    match action {
        Action::Done => {
            let input = view.read_input();
            view.show_result(&format!("Input: {input}"));
        }
        Action::Reset => view.clear(),
        Action::Calculate(statistic) => {
            let input = view.read_input();
            let line = result_line(statistic, &input);
            view.show_result(&line);
        }
    }
}

/// Formats the outcome of computing `statistic` on `input` as a single line.
pub fn result_line(statistic: Statistic, input: &str) -> String {
    match statistic.compute(input) {
        Ok(value) => {
            log::info!("{statistic} of {input:?} = {value}");
            format!("{statistic}: {value}")
        }
        Err(e) => {
            log::warn!("{statistic} of {input:?} failed: {e}");
            format!("Error: {e}")
        }
    }
}
