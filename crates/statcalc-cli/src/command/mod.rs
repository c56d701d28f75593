use std::path::PathBuf;

use clap::{Parser, Subcommand};
use statcalc_stats::Statistic;

use crate::logging::{self, LogLevel};

use self::calc::CalcArg;

mod calc;
mod form;
mod prompt;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log verbosity
    #[clap(long, global = true, value_enum, env = "STATCALC_LOG", default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
    /// Write logs to this file instead of stderr
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the mean, rounded to two decimals
    Mean(#[clap(flatten)] CalcArg),
    /// Print the sample standard deviation, rounded to two decimals
    #[command(name = "sd")]
    StdDev(#[clap(flatten)] CalcArg),
    /// Print the median
    Median(#[clap(flatten)] CalcArg),
    /// Print the number of values
    #[command(name = "size")]
    SampleSize(#[clap(flatten)] CalcArg),
    /// Print every statistic at once
    Summary(#[clap(flatten)] CalcArg),
    /// Line-oriented calculator reading commands from stdin
    Prompt,
    /// Full-screen calculator form
    Form,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args.mode.unwrap_or(Mode::Form);

    // the form owns the terminal, so stderr logging would corrupt it
    let use_stderr = !matches!(mode, Mode::Form);
    logging::init(args.log_level, args.log_file.as_deref(), use_stderr)?;

    match mode {
        Mode::Mean(arg) => calc::run(Statistic::Mean, &arg)?,
        Mode::StdDev(arg) => calc::run(Statistic::StandardDeviation, &arg)?,
        Mode::Median(arg) => calc::run(Statistic::Median, &arg)?,
        Mode::SampleSize(arg) => calc::run(Statistic::SampleSize, &arg)?,
        Mode::Summary(arg) => calc::run_summary(&arg)?,
        Mode::Prompt => prompt::run()?,
        Mode::Form => form::run()?,
    }
    Ok(())
}
