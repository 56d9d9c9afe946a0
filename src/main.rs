use std::env;
use std::fmt::Display;
use std::process;

use dated_logger::{log_errorf, log_fatal, log_fatalf, Logger, LoggerError};

const USAGE: &str = "Usage: dlog <log-file> <print|error|fatal|fatalf> <message>...";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), LoggerError> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        return Err(LoggerError::InvalidArguments(USAGE.to_string()));
    }

    let log_file = &args[1];
    let mode = args[2].as_str();
    let words = &args[3..];

    if !matches!(mode, "print" | "error" | "fatal" | "fatalf") {
        return Err(LoggerError::InvalidArguments(USAGE.to_string()));
    }

    // Empty log file name falls back to the default
    let logger = Logger::new(log_file)?;

    match mode {
        "print" => {
            let values: Vec<&dyn Display> = words.iter().map(|w| w as &dyn Display).collect();
            logger.print(&values);
        }
        "error" => log_errorf!(logger, "{}", words.join(" ")),
        "fatal" => log_fatal!(logger, words.join(" ")),
        _ => log_fatalf!(logger, "{} ({} words)", words.join(" "), words.len()),
    }

    logger.close()
}
