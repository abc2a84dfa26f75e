//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors collapse value-object-specific detail into a message
//! string plus a coarse kind, suitable for crossing a process or
//! transport boundary. Every variant is recoverable by the caller:
//! validation and duplicate failures by correcting the input, storage
//! failures by retrying at the transport adapter's discretion.

use crate::application::use_cases::add_stock::RepositoryError;
use crate::domain::errors::DomainError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StockApplicationError {
    /// Input validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// A stock with this ticker already exists.
    #[error("stock already exists: {0}")]
    AlreadyExists(String),

    /// The storage layer failed; existence of the stock is indeterminate.
    #[error("storage failure: {}", .0.as_deref().unwrap_or("unknown cause"))]
    Storage(Option<String>),
}

impl StockApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an already-exists error for the given ticker.
    #[must_use]
    pub fn already_exists(ticker: impl Into<String>) -> Self {
        Self::AlreadyExists(ticker.into())
    }

    /// Creates a storage failure with a cause message.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(Some(message.into()))
    }
}

impl From<DomainError> for StockApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::AlreadyExists(ticker) => Self::AlreadyExists(ticker),
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<RepositoryError> for StockApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists(ticker) => Self::AlreadyExists(ticker),
            RepositoryError::StorageFailure(message) => Self::Storage(message),
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, StockApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_carries_message() {
        let err = StockApplicationError::validation("ticker symbol is required");
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn already_exists_carries_ticker() {
        let err = StockApplicationError::already_exists("AAPL");
        assert_eq!(err.to_string(), "stock already exists: AAPL");
    }

    #[test]
    fn storage_error_without_cause() {
        let err = StockApplicationError::Storage(None);
        assert_eq!(err.to_string(), "storage failure: unknown cause");
    }

    #[test]
    fn storage_error_with_cause() {
        let err = StockApplicationError::storage("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn repository_conflict_maps_to_already_exists() {
        let err: StockApplicationError = RepositoryError::AlreadyExists("AAPL".to_string()).into();
        assert_eq!(err, StockApplicationError::AlreadyExists("AAPL".to_string()));
    }

    #[test]
    fn repository_failure_maps_to_storage() {
        let err: StockApplicationError =
            RepositoryError::StorageFailure(Some("timeout".to_string())).into();
        assert!(matches!(err, StockApplicationError::Storage(Some(_))));
    }

    #[test]
    fn domain_validation_maps_to_validation() {
        let domain = DomainError::InvalidId("nil".to_string());
        let err: StockApplicationError = domain.into();
        assert!(matches!(err, StockApplicationError::Validation(_)));
    }
}
