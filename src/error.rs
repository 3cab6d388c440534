//! Error handling for the resume studio client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (status {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;

impl StudioError {
    /// True when the server answered but reported a logical failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, StudioError::Rejected(_) | StudioError::Server { .. })
    }
}
