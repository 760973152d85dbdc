use regex::Error as RegexError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the Folder CSV application
#[derive(Debug)]
pub enum Error {
    /// Ingestion produced no usable file names
    EmptySelection,
    /// A drop payload exposed neither entries nor a flat file collection
    UnsupportedDropPayload,
    /// The removal pattern could not be compiled
    InvalidPattern { source: RegexError, pattern: String },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// A removal index outside the current list
    InvalidIndex { index: usize, len: usize },
    /// Error raised by the CSV writer
    CsvSerialization { source: csv::Error },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl Error {
    /// Whether the error should be reported as the "no files found" notice
    pub fn is_empty_selection(&self) -> bool {
        matches!(self, Error::EmptySelection | Error::UnsupportedDropPayload)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySelection | Error::UnsupportedDropPayload => {
                write!(f, "No files found in the selection")
            }
            Error::InvalidPattern { pattern, source } => {
                write!(f, "Invalid removal pattern '{pattern}': {source}")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::InvalidIndex { index, len } => {
                write!(f, "No file at index {index} (list has {len} entries)")
            }
            Error::CsvSerialization { source } => {
                write!(f, "Failed to serialise CSV: {source}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::InvalidPattern { source, .. } => Some(source),
            Error::CsvSerialization { source } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::CsvSerialization { source: err }
    }
}

/// Custom Result type for the Folder CSV application
///
/// # Examples
/// ```
/// use folder_csv::prelude::{Result, generic_error};
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
///
///     // Or return an error
///     // Err(generic_error("Something went wrong"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an empty selection error
pub fn empty_selection_error() -> Error {
    Error::EmptySelection
}

/// Helper function to create an unsupported drop payload error
pub fn unsupported_payload_error() -> Error {
    Error::UnsupportedDropPayload
}

/// Helper function to create an invalid pattern error
pub fn invalid_pattern_error(err: RegexError, pattern: &str) -> Error {
    Error::InvalidPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid index error
pub fn invalid_index_error(index: usize, len: usize) -> Error {
    Error::InvalidIndex { index, len }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
