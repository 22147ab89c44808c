use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur while the
/// tool loads rosters, talks to the operator, or writes letters.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors bubbled up from the Excel reader implementation.
    #[error("Excel read error: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when a roster is empty or no workbook is available to read.
    #[error("unable to read roster: {0}")]
    InputRead(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a duty title cannot be laid out on the subject line.
    #[error("cannot wrap duty title: {0}")]
    Wrapper(String),

    /// Raised when an appointment letter could not be saved.
    #[error("failed to write letter {path}: {message}")]
    DocumentWrite { path: PathBuf, message: String },

    /// Raised when operator input ends or a menu has nothing to offer.
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
