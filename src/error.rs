use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for vidclean
#[derive(Error, Debug)]
pub enum VidcleanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Failed to get user input: {0}")]
    Prompt(String),

    #[error("Invalid field pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Errors scoped to a single candidate file.
///
/// These never abort a run; the orchestrator reports them and moves on.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("File {0} is not valid UTF-8 text: {1}")]
    Decode(PathBuf, FromUtf8Error),

    #[error("Failed to write backup for {0}: {1}")]
    Backup(PathBuf, std::io::Error),

    #[error("Failed to write {0}: {1}")]
    Write(PathBuf, std::io::Error),
}

impl FileError {
    /// Path of the file that failed
    pub fn path(&self) -> &Path {
        match self {
            FileError::Read(p, _)
            | FileError::Decode(p, _)
            | FileError::Backup(p, _)
            | FileError::Write(p, _) => p,
        }
    }

    /// Short label for console reports
    pub fn kind(&self) -> &'static str {
        match self {
            FileError::Decode(..) => "malformed document",
            FileError::Read(..) | FileError::Backup(..) | FileError::Write(..) => "I/O error",
        }
    }
}

pub type Result<T> = std::result::Result<T, VidcleanError>;
