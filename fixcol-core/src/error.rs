use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixcolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("source file does not exist: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("destination directory does not exist: {}", .0.display())]
    DestinationMissing(PathBuf),

    #[error("could not create temporary file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("line {line} has {len} characters, layout needs {expected}")]
    ShortLine {
        line: usize,
        len: usize,
        expected: usize,
    },

    #[error("could not write CSV file: {0}")]
    CsvWrite(#[source] std::io::Error),

    #[error("settings directory is empty: {}", .0.display())]
    EmptySettings(PathBuf),

    #[error("no layout labelled \"{0}\"")]
    UnknownLayout(String),

    #[error("invalid layout labels: {0}")]
    InvalidLabels(String),
}

/// Result kind reported to callers. Every error maps to exactly one kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ok,
    Error,
    SourceMissing,
    DestinationMissing,
    TempFileError,
    CsvWriteError,
}

impl Outcome {
    pub fn of<T>(res: &Result<T>) -> Self {
        match res {
            Ok(_) => Outcome::Ok,
            Err(e) => e.outcome(),
        }
    }

    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Ok => 0,
            Outcome::Error => 1,
            Outcome::SourceMissing => 2,
            Outcome::DestinationMissing => 3,
            Outcome::TempFileError => 4,
            Outcome::CsvWriteError => 5,
        }
    }
}

impl FixcolError {
    pub fn outcome(&self) -> Outcome {
        match self {
            FixcolError::SourceMissing(_) => Outcome::SourceMissing,
            FixcolError::DestinationMissing(_) => Outcome::DestinationMissing,
            FixcolError::TempFile(_) => Outcome::TempFileError,
            FixcolError::ShortLine { .. } | FixcolError::CsvWrite(_) => Outcome::CsvWriteError,
            _ => Outcome::Error,
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, FixcolError>;
