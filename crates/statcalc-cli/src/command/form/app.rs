use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};
use statcalc_stats::Statistic;

use crate::{
    tui::App,
    view::{self, Action, CalculatorView},
};

const STATISTIC_KEYS: [(u8, Statistic); 4] = [
    (1, Statistic::Mean),
    (2, Statistic::StandardDeviation),
    (3, Statistic::Median),
    (4, Statistic::SampleSize),
];

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const DESCRIPTION_STYLE: Style = Style::new().fg(Color::White);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Calculator form: an input field, a row of statistic keys and a result panel.
#[derive(Debug, Default)]
pub struct FormApp {
    input: String,
    result: String,
    should_exit: bool,
}

impl FormApp {
    pub fn new() -> Self {
        Self::default()
    }

    fn action_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        match code {
            KeyCode::Enter => Some(Action::Done),
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Reset),
            KeyCode::F(n) => STATISTIC_KEYS
                .iter()
                .find(|(key, _)| *key == n)
                .map(|(_, statistic)| Action::Calculate(*statistic)),
            _ => None,
        }
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Enter integers separated by commas ");
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(self.input.as_str()).block(block), area);

        let width = u16::try_from(self.input.chars().count()).unwrap_or(u16::MAX);
        let x = inner
            .x
            .saturating_add(width)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }

    fn draw_keys(frame: &mut Frame, area: Rect) {
        let mut spans = vec![];
        for (i, (key, statistic)) in STATISTIC_KEYS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", SEPARATOR_STYLE));
            }
            spans.push(Span::styled(format!("F{key}"), KEY_STYLE));
            spans.push(Span::styled(format!(" {statistic}"), DESCRIPTION_STYLE));
        }
        frame.render_widget(Line::from(spans).centered(), area);
    }

    fn draw_result(&self, frame: &mut Frame, area: Rect) {
        let result = Paragraph::new(self.result.as_str())
            .block(Block::bordered().title(" Result "))
            .wrap(Wrap { trim: false });
        frame.render_widget(result, area);
    }
}

impl CalculatorView for FormApp {
    fn read_input(&self) -> String {
        self.input.clone()
    }

    fn show_result(&mut self, text: &str) {
        text.clone_into(&mut self.result);
    }

    fn clear(&mut self) {
        self.input.clear();
        self.result.clear();
    }
}

impl App for FormApp {
    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_press_event() else {
            return;
        };
        if let Some(action) = Self::action_for(key.code, key.modifiers) {
            view::perform(self, action);
            return;
        }
        match key.code {
            KeyCode::Esc => self.should_exit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_exit = true;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            KeyCode::Backspace => _ = self.input.pop(),
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let help_text = Line::from("Enter (Done) | Ctrl-U (Undo) | Esc (Quit)")
            .style(SEPARATOR_STYLE)
            .centered();

        let [title_area, input_area, keys_area, result_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(Line::from("Statistical Calculator").centered(), title_area);
        self.draw_input(frame, input_area);
        Self::draw_keys(frame, keys_area);
        self.draw_result(frame, result_area);
        frame.render_widget(help_text, help_area);
    }
}
