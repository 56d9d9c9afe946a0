//! Rendering of log lines: timestamps, caller tags and the Sprint helpers.

use std::fmt::{self, Display, Write as _};
use std::panic::Location;
use std::path::Path;

use chrono::{DateTime, Local};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const ERROR_TAG: &str = "[ERROR]";

pub const UNKNOWN_CALLER: &str = "unknown:0";

pub fn timestamp(now: &DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

pub fn date_partition(now: &DateTime<Local>) -> String {
    now.format(DATE_FORMAT).to_string()
}

// Needs #[track_caller] on every frame back to the public logging method.
#[track_caller]
pub fn caller_tag() -> String {
    let location = Location::caller();
    caller_tag_from(location.file(), location.line())
}

pub fn caller_tag_from(file: &str, line: u32) -> String {
    match Path::new(file).file_name().and_then(|name| name.to_str()) {
        Some(base) if !base.is_empty() => format!("{}:{}", base, line),
        _ => UNKNOWN_CALLER.to_string(),
    }
}

pub fn compose_line(timestamp: &str, caller: &str, message: &str) -> String {
    format!("[{}] [{}] {}", timestamp, caller, message)
}

pub fn error_message(message: &str) -> String {
    format!("{} {}", ERROR_TAG, message)
}

// values joined by a single space
pub fn sprint(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", value);
    }
    out
}

pub fn sprintf(args: fmt::Arguments<'_>) -> String {
    fmt::format(args)
}
