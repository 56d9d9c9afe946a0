use std::env;
use std::fmt::{self, Display};
use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use chrono::Local;
use parking_lot::{Mutex, MutexGuard};

use crate::error::LoggerError;
use crate::format;

pub const DEFAULT_FILENAME: &str = "application.log";
pub const LOGS_DIR: &str = "logs";

/// Writes every line to `logs/<YYYY-MM-DD>/<file>` and echoes it to stdout.
///
/// The date partition is fixed when the logger is created. A logger kept
/// open past midnight keeps writing into the previous day's directory.
///
/// Lock order is the file writer first, then stdout. Do not log while
/// holding `io::stdout().lock()`: another thread inside a logging call
/// would wait on stdout while this one waits on the writer.
pub struct Logger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl Logger {
    pub fn new(filename: &str) -> Result<Self, LoggerError> {
        let wd = env::current_dir().map_err(LoggerError::WorkingDir)?;
        Self::new_in(wd, filename)
    }

    /// Same as [`Logger::new`], rooted at `base` instead of the working directory.
    ///
    /// Directories created before a failing step are left in place.
    pub fn new_in(base: impl AsRef<Path>, filename: &str) -> Result<Self, LoggerError> {
        let filename = if filename.is_empty() {
            DEFAULT_FILENAME
        } else {
            filename
        };

        let logs_dir = base.as_ref().join(LOGS_DIR);
        create_dir(&logs_dir).map_err(|source| LoggerError::LogsDir {
            path: logs_dir.clone(),
            source,
        })?;

        let date_dir = logs_dir.join(format::date_partition(&Local::now()));
        create_dir(&date_dir).map_err(|source| LoggerError::DateDir {
            path: date_dir.clone(),
            source,
        })?;

        let path = date_dir.join(filename);
        let file = open_append(&path).map_err(|source| LoggerError::OpenFile {
            path: path.clone(),
            source,
        })?;

        Ok(Logger {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn close(self) -> Result<(), LoggerError> {
        let file = self
            .writer
            .into_inner()
            .into_inner()
            .map_err(|err| LoggerError::Close(err.into_error()))?;
        file.sync_all().map_err(LoggerError::Close)
    }

    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) {
        self.emit(&format::sprint(values));
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.emit(&format::sprintf(args));
    }

    #[track_caller]
    pub fn error(&self, values: &[&dyn Display]) {
        self.emit(&format::error_message(&format::sprint(values)));
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(&format::error_message(&format::sprintf(args)));
    }

    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) -> ! {
        let guard = self.emit(&format::sprint(values));
        exit_holding(guard)
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let guard = self.emit(&format::sprintf(args));
        exit_holding(guard)
    }

    pub fn sprint(&self, values: &[&dyn Display]) -> String {
        format::sprint(values)
    }

    pub fn sprintf(&self, args: fmt::Arguments<'_>) -> String {
        format::sprintf(args)
    }

    // write errors are dropped
    #[track_caller]
    fn emit(&self, message: &str) -> MutexGuard<'_, BufWriter<File>> {
        let mut writer = self.writer.lock();

        let timestamp = format::timestamp(&Local::now());
        let caller = format::caller_tag();
        let line = format::compose_line(&timestamp, &caller, message);

        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();

        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);

        writer
    }
}

// The guard is never released; exit tears the process down with it held.
fn exit_holding(_guard: MutexGuard<'_, BufWriter<File>>) -> ! {
    let _ = io::stdout().flush();
    process::exit(1)
}

fn create_dir(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path)
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}
