use std::io;

use thiserror::Error;

/// Failures while acquiring a book from the remote archive.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid identifier `{0}`: must be a positive integer")]
    InvalidIdentifier(String),

    #[error("archive unreachable")]
    Unreachable(#[source] reqwest::Error),

    #[error("no book with identifier {0} in the archive")]
    NotFound(u32),

    #[error("could not parse archive response: {0}")]
    ParseFailure(String),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Failures while requesting an analysis from the completion endpoint.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("nothing to analyze: text is empty")]
    EmptyText,

    #[error("text too large to analyze ({0} chars)")]
    InputTooLarge(usize),

    #[error("completion endpoint unavailable")]
    ServiceUnavailable(#[source] reqwest::Error),

    #[error("completion endpoint returned an empty or malformed result")]
    EmptyResult,
}

/// Failures of the on-disk book cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache io failure")]
    Io(#[from] io::Error),

    #[error("cache record unreadable")]
    Serde(#[from] serde_json::Error),

    #[error("cached text for identifier {0} differs from the new text; refusing to overwrite")]
    Conflict(u32),
}
