use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to scan input directory {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session file is empty or unreadable")]
    EmptyInput,

    #[error("{0}")]
    MalformedInput(String),

    #[error("no user prompts found in session")]
    NoPrompts,

    #[error("Core error: {0}")]
    Core(#[from] specslides_core::error::CoreError),
}
