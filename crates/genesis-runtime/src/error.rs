use std::path::PathBuf;

use thiserror::Error;

/// Host configuration errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("gentx directory {} does not exist", .0.display())]
    MissingGentxDir(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),
}
