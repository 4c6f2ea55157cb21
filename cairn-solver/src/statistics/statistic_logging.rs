//! The process-wide sink of the statistics.
//!
//! Statistics are written as lines `{prefix} {name}={value}`, optionally followed by a closing
//! line once a block of statistics is complete. Nothing is written until
//! [`configure_statistic_logging`] has been called.

use std::fmt::Display;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// Where and how the statistics are written.
pub struct StatisticOptions {
    /// Written in front of every statistic.
    pub prefix: &'static str,
    /// The line which closes a block of statistics.
    pub closing_line: Option<&'static str>,
    /// The case the names are converted to; names are written as they are otherwise.
    pub casing: Option<Case>,
    pub writer: Box<dyn Write + Send>,
}

impl StatisticOptions {
    /// Options which write to standard output with the given prefix.
    pub fn stdout(prefix: &'static str) -> StatisticOptions {
        StatisticOptions {
            prefix,
            closing_line: None,
            casing: None,
            writer: Box::new(std::io::stdout()),
        }
    }

    fn write_line(&mut self, line: impl Display) {
        if let Err(error) = writeln!(self.writer, "{line}") {
            debug!("Could not write statistic: {error}");
        }
    }
}

impl std::fmt::Debug for StatisticOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("closing_line", &self.closing_line)
            .field("casing", &self.casing)
            .finish_non_exhaustive()
    }
}

static STATISTIC_OPTIONS: OnceLock<Mutex<StatisticOptions>> = OnceLock::new();

/// Enables the logging of statistics. Only the first configuration takes effect.
pub fn configure_statistic_logging(options: StatisticOptions) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| Mutex::new(options));
}

fn with_options(action: impl FnOnce(&mut StatisticOptions)) {
    if let Some(Ok(mut options)) = STATISTIC_OPTIONS.get().map(Mutex::lock) {
        action(&mut options);
    }
}

/// Writes the statistic `name` with the given `value`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_options(|options| {
        let name = match options.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        let line = format!("{} {name}={value}", options.prefix);
        options.write_line(line);
    });
}

/// Writes the closing line, if one is configured.
pub fn log_statistic_postfix() {
    with_options(|options| {
        if let Some(closing_line) = options.closing_line {
            options.write_line(closing_line);
        }
    });
}

pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
