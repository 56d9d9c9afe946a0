use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to get working directory: {0}")]
    WorkingDir(#[source] io::Error),

    #[error("Error creating logs directory {}: {}", .path.display(), .source)]
    LogsDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create date directory {}: {}", .path.display(), .source)]
    DateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open log file {}: {}", .path.display(), .source)]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to close log file: {0}")]
    Close(#[source] io::Error),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
