use std::{io, result};

use thiserror::Error;

/// Error types for fetching, parsing and reporting PubMed records
#[derive(Error, Debug)]
pub enum FetcherError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// CSV serialization failed
    #[error("CSV write failed: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error for report output
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

pub type Result<T> = result::Result<T, FetcherError>;
