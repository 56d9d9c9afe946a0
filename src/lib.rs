//! Timestamped, caller-annotated logging to stdout and a date-partitioned file.
//!
//! ```no_run
//! use dated_logger::{log_errorf, log_print, Logger};
//!
//! let logger = Logger::new("transactions.log")?;
//! log_print!(logger, "processed", 42, "records");
//! log_errorf!(logger, "client {} is locked", 7);
//! logger.close()?;
//! # Ok::<(), dated_logger::LoggerError>(())
//! ```

pub mod error;
pub mod format;
pub mod logger;

pub use error::LoggerError;
pub use format::{sprint, sprintf};
pub use logger::{Logger, DEFAULT_FILENAME, LOGS_DIR};

/// `log_print!(logger, a, b, ...)` logs the values separated by spaces.
#[macro_export]
macro_rules! log_print {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.print(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_printf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.printf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.error(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Logs like [`log_print!`] and exits with status 1.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.fatal(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}

/// Renders values the way [`log_print!`] does, without logging them.
#[macro_export]
macro_rules! sprint {
    ($($value:expr),* $(,)?) => {
        $crate::format::sprint(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
