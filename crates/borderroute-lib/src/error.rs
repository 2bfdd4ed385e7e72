use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the borderroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a country code does not resolve to a known country.
    #[error("country not found: '{code}'")]
    CountryNotFound { code: String },

    /// Raised when both countries exist but no land route connects them.
    #[error("no land route found from '{origin}' to '{destination}'")]
    RouteNotFound { origin: String, destination: String },

    /// Raised when a search discovers more countries than its budget allows.
    #[error("route search exceeded the limit of {limit} visited countries")]
    SearchLimitExceeded { limit: usize },

    /// Unexpected condition, such as a predecessor chain that never reaches
    /// the origin.
    #[error("internal routing failure: {message}")]
    Internal { message: String },

    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when the same country code appears twice in a dataset.
    #[error("duplicate country code encountered: {code}")]
    DuplicateCountry { code: String },

    /// Raised when a dataset record cannot be turned into a country.
    #[error("invalid dataset: {message}")]
    InvalidDataset { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than by the
    /// service itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::CountryNotFound { .. } | Error::RouteNotFound { .. }
        )
    }
}
