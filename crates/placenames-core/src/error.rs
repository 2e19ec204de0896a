// crates/placenames-core/src/error.rs
use thiserror::Error;

/// Errors produced by the data access side of the crate.
///
/// The description parser and the relevance ranker never return these: every
/// input there has a defined degraded output. Only I/O, decoding and the two
/// remote services can fail.
#[derive(Debug, Error)]
pub enum PlaceNamesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote answered with a non-success HTTP status.
    #[error("{context} ({status})")]
    Status { context: &'static str, status: u16 },

    /// The feature service answered 200 but carried an `error` envelope.
    #[error("{0}")]
    Service(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, PlaceNamesError>;
