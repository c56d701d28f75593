use std::{io, path::Path};

use log::LevelFilter;

/// Log verbosity selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Installs the global logger.
///
/// Records go to `log_file` when given, otherwise to stderr if `use_stderr`
/// is set. With neither, no logger is installed.
pub(crate) fn init(
    level: LogLevel,
    log_file: Option<&Path>,
    use_stderr: bool,
) -> anyhow::Result<()> {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ));
        })
        .level(level.into());

    let dispatch = match log_file {
        Some(path) => dispatch.chain(fern::log_file(path)?),
        None if use_stderr => dispatch.chain(io::stderr()),
        None => return Ok(()),
    };
    dispatch.apply()?;

    log::debug!("logging initialized at {level:?}");
    Ok(())
}
