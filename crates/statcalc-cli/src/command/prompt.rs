use std::io::{self, BufRead, Write};

use statcalc_stats::Statistic;

use crate::view::{self, Action, CalculatorView};

const HELP: &str = "\
Enter integers separated by commas, then one of:
  mean | sd | median | size   compute a statistic
  done                        show the current input
  undo                        clear the input and result
  help                        show this message
  quit                        exit";

#[derive(Debug, PartialEq, Eq)]
enum PromptLine {
    Action(Action),
    Input(String),
    Help,
    Quit,
}

impl PromptLine {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "mean" => Self::Action(Action::Calculate(Statistic::Mean)),
            "sd" => Self::Action(Action::Calculate(Statistic::StandardDeviation)),
            "median" => Self::Action(Action::Calculate(Statistic::Median)),
            "size" => Self::Action(Action::Calculate(Statistic::SampleSize)),
            "done" => Self::Action(Action::Done),
            "undo" | "reset" => Self::Action(Action::Reset),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Input(line.to_owned()),
        }
    }
}

/// Line-oriented view writing results to `out`.
///
/// Write failures are kept and reported by the session loop after the action.
#[derive(Debug)]
struct PromptView<W> {
    input: String,
    out: W,
    error: Option<io::Error>,
}

impl<W> PromptView<W>
where
    W: Write,
{
    fn new(out: W) -> Self {
        Self {
            input: String::new(),
            out,
            error: None,
        }
    }

    fn write_line(&mut self, text: &str) {
        if self.error.is_none()
            && let Err(e) = writeln!(self.out, "{text}")
        {
            self.error = Some(e);
        }
    }

    fn take_error(&mut self) -> io::Result<()> {
        self.error.take().map_or(Ok(()), Err)
    }
}

impl<W> CalculatorView for PromptView<W>
where
    W: Write,
{
    fn read_input(&self) -> String {
        self.input.clone()
    }

    fn show_result(&mut self, text: &str) {
        self.write_line(text);
    }

    fn clear(&mut self) {
        self.input.clear();
        self.write_line("Cleared");
    }
}

fn run_session<R, W>(input: R, out: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut prompt = PromptView::new(out);
    prompt.write_line(HELP);

    let mut lines = input.lines();
    loop {
        write!(prompt.out, "> ")?;
        prompt.out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        match PromptLine::parse(&line) {
            PromptLine::Action(action) => view::perform(&mut prompt, action),
            PromptLine::Input(text) => {
                log::debug!("input set to {text:?}");
                prompt.input = text;
            }
            PromptLine::Help => prompt.write_line(HELP),
            PromptLine::Quit => break,
        }
        prompt.take_error()?;
    }
    writeln!(prompt.out)?;
    Ok(())
}

pub(crate) fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock())?;
    Ok(())
}
