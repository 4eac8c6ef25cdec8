//! Logger implementation for the log crate.

use core::fmt::{self, Display};

use lazyinit::LazyInit;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::MonResult;
use crate::error::MonError;

/// Output primitive the logger writes finished lines to.
pub type LogSink = fn(fmt::Arguments);

static SINK: LazyInit<LogSink> = LazyInit::new();

pub struct MonitorLogger;

static LOGGER: MonitorLogger = MonitorLogger;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Red = 31,
    Green = 32,
    Yellow = 33,
    Cyan = 36,
    BrightBlack = 90,
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{1B}[{}m", *self as u8)
    }
}

impl Log for MonitorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(sink) = SINK.get() else {
            return;
        };

        let level = record.level();
        let file = record.file().unwrap_or("none");
        let line = record.line().unwrap_or(0);
        let color = level_color(level);
        let color_reset = "\u{1B}[0m";

        sink(format_args!(
            "[{level:<5} {file}:{line}] {color}{}{color_reset}\n",
            record.args()
        ));
    }

    fn flush(&self) {}
}

fn level_color(level: Level) -> ColorCode {
    match level {
        Level::Error => ColorCode::Red,
        Level::Warn => ColorCode::Yellow,
        Level::Info => ColorCode::Green,
        Level::Debug => ColorCode::Cyan,
        Level::Trace => ColorCode::BrightBlack,
    }
}

/// Maps the build-time `LOG` setting to a level filter.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Initialize the logger, sending records to `sink`.
pub fn init(sink: LogSink) -> MonResult<()> {
    if SINK.is_inited() {
        return Err(MonError::LoggerInitFailed.into());
    }
    SINK.init_once(sink);
    log::set_logger(&LOGGER).map_err(|_| MonError::LoggerInitFailed)?;
    log::set_max_level(level_from_env(option_env!("LOG")));
    Ok(())
}
