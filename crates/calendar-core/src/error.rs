//! Error types shared by the core and the frontend

use thiserror::Error;

/// Failure to populate the catalog. Always fatal for the page session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Server answered with a non-success status
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    /// Request never produced a response
    #[error("network error: {0}")]
    Transport(String),
    /// Response body was not a valid catalog document
    #[error("invalid catalog: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

/// Failure reading or writing the persisted favorites.
///
/// Never fatal: callers log it and carry on with in-memory state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FavoritesError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("stored favorites are not a list of ids: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = CatalogError::Http { status: 404, status_text: "Not Found".to_string() };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<Vec<i64>>("{").unwrap_err();
        let err: CatalogError = serde_err.into();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
