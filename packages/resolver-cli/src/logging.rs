// Console Logger
//
// `log` backend that writes to the console.

use std::str::FromStr;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }

    fn from_level(level: Level) -> Self {
        match level {
            Level::Trace | Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" | "trace" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level `{}`", other)),
        }
    }
}

/// Console logger. Info goes to stdout, everything else to stderr.
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.is_enabled(LogLevel::from_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match LogLevel::from_level(record.level()) {
            LogLevel::Debug => eprintln!("[DEBUG] {}", record.args()),
            LogLevel::Info => println!("[INFO] {}", record.args()),
            LogLevel::Warn => eprintln!("[WARN] {}", record.args()),
            LogLevel::Error => eprintln!("[ERROR] {}", record.args()),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Only the first call takes effect.
pub fn init(level: LogLevel) {
    if log::set_boxed_logger(Box::new(ConsoleLogger::new(level))).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod log_level_tests {
        use super::*;

        #[test]
        fn should_have_correct_ordering() {
            assert!(LogLevel::Debug < LogLevel::Info);
            assert!(LogLevel::Info < LogLevel::Warn);
            assert!(LogLevel::Warn < LogLevel::Error);
        }

        #[test]
        fn should_parse_from_str() {
            assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
            assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
            assert!("loud".parse::<LogLevel>().is_err());
        }
    }

    mod console_logger_tests {
        use super::*;

        #[test]
        fn should_create_with_level() {
            let logger = ConsoleLogger::new(LogLevel::Warn);
            assert_eq!(logger.level(), LogLevel::Warn);
        }

        #[test]
        fn should_check_level_enabled() {
            let logger = ConsoleLogger::new(LogLevel::Warn);

            assert!(!logger.is_enabled(LogLevel::Debug));
            assert!(!logger.is_enabled(LogLevel::Info));
            assert!(logger.is_enabled(LogLevel::Warn));
            assert!(logger.is_enabled(LogLevel::Error));
        }

        #[test]
        fn should_filter_records_by_metadata() {
            let logger = ConsoleLogger::new(LogLevel::Info);
            let debug = Metadata::builder().level(Level::Debug).build();
            let error = Metadata::builder().level(Level::Error).build();

            assert!(!logger.enabled(&debug));
            assert!(logger.enabled(&error));
        }
    }
}
