//! # Add Stock Use Case
//!
//! Use case for registering a new stock.
//!
//! This use case orchestrates five ordered, short-circuiting steps:
//!
//! 1. Ticker validation
//! 2. Duplicate pre-check against the repository
//! 3. Existence branch
//! 4. Aggregate construction
//! 5. Persistence and response projection
//!
//! Duplicate handling is two-phase: the pre-check in step 2 minimizes the
//! race window, but the authoritative uniqueness decision is the one the
//! persistence layer enforces in step 5. A conflict surfaced there is
//! translated into the same `AlreadyExists` error a caller would see from
//! the pre-check.

use crate::application::dto::{AddStockRequest, AddStockResponse};
use crate::application::error::{ApplicationResult, StockApplicationError};
use crate::domain::entities::Stock;
use crate::domain::value_objects::TickerSymbol;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error returned by [`StockRepository`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A stock with this ticker is already stored. This is the
    /// storage layer's own uniqueness signal (e.g., a constraint
    /// violation), not the pre-check result.
    #[error("stock already exists: {0}")]
    AlreadyExists(String),

    /// The storage engine failed.
    #[error("storage failure: {}", .0.as_deref().unwrap_or("unknown cause"))]
    StorageFailure(Option<String>),
}

impl RepositoryError {
    /// Creates a storage failure with a cause message.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageFailure(Some(message.into()))
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository port for stock persistence.
///
/// Implemented by the in-memory and PostgreSQL adapters in the
/// infrastructure layer; the use case depends only on this contract.
#[async_trait]
pub trait StockRepository: Send + Sync + fmt::Debug {
    /// Returns true if a stock with this ticker is already stored.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::StorageFailure`] if the query fails.
    async fn exists_by_ticker(&self, ticker: &TickerSymbol) -> RepositoryResult<bool>;

    /// Persists a new stock, returning the stored aggregate (which may
    /// carry storage-assigned identity or timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::AlreadyExists`] if the storage layer's
    /// uniqueness constraint rejects the ticker, or
    /// [`RepositoryError::StorageFailure`] for any other failure.
    async fn add(&self, stock: &Stock) -> RepositoryResult<Stock>;
}

/// Use case for registering a new stock.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use stock_registry::application::dto::AddStockRequest;
/// use stock_registry::application::use_cases::AddStockUseCase;
/// use stock_registry::infrastructure::persistence::in_memory::InMemoryStockRepository;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let use_case = AddStockUseCase::new(Arc::new(InMemoryStockRepository::new()));
/// let response = use_case.execute(AddStockRequest::new("aapl")).await.unwrap();
/// assert_eq!(response.ticker, "AAPL");
/// # }
/// ```
#[derive(Debug)]
pub struct AddStockUseCase {
    repository: Arc<dyn StockRepository>,
}

impl AddStockUseCase {
    /// Creates a new AddStockUseCase over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn StockRepository>) -> Self {
        Self { repository }
    }

    /// Executes the add-stock use case.
    ///
    /// Steps run in order and short-circuit on the first failure; a
    /// storage failure during the duplicate pre-check is a hard failure
    /// because existence is indeterminate.
    ///
    /// # Errors
    ///
    /// Returns [`StockApplicationError::Validation`] for an invalid
    /// ticker, [`StockApplicationError::AlreadyExists`] when the ticker
    /// is taken (detected by either the pre-check or the storage layer's
    /// uniqueness constraint), or [`StockApplicationError::Storage`]
    /// when persistence fails.
    pub async fn execute(&self, request: AddStockRequest) -> ApplicationResult<AddStockResponse> {
        // 1. Validate ticker
        let ticker = TickerSymbol::new(&request.ticker)
            .map_err(|e| StockApplicationError::validation(e.to_string()))?;

        debug!(ticker = %ticker, "validated ticker, running duplicate pre-check");

        // 2. Duplicate pre-check; indeterminate existence is a hard failure
        let exists = self.repository.exists_by_ticker(&ticker).await?;

        // 3. Existence branch
        if exists {
            debug!(ticker = %ticker, "duplicate detected by pre-check");
            return Err(StockApplicationError::already_exists(ticker.as_str()));
        }

        // 4. Construct entity; unreachable failure given validated input
        let stock = Stock::create(ticker.clone(), None, None, None).map_err(|e| {
            warn!(ticker = %ticker, error = %e, "aggregate construction failed unexpectedly");
            StockApplicationError::validation(e.to_string())
        })?;

        // 5. Persist; a conflict here lost the race between steps 2 and 5
        let persisted = self.repository.add(&stock).await.map_err(|e| {
            if matches!(&e, RepositoryError::AlreadyExists(_)) {
                debug!(ticker = %ticker, "duplicate detected at the storage layer");
            }
            StockApplicationError::from(e)
        })?;

        info!(ticker = %ticker, id = %persisted.id(), "stock registered");

        Ok(AddStockResponse::from_stock(&persisted))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Mock repository with scripted behavior and call counters.
    #[derive(Debug)]
    struct MockStockRepository {
        existing: Vec<String>,
        exists_failure: Option<RepositoryError>,
        add_failure: Option<RepositoryError>,
        exists_calls: AtomicUsize,
        add_calls: AtomicUsize,
    }

    impl MockStockRepository {
        fn empty() -> Self {
            Self {
                existing: vec![],
                exists_failure: None,
                add_failure: None,
                exists_calls: AtomicUsize::new(0),
                add_calls: AtomicUsize::new(0),
            }
        }

        fn with_ticker(ticker: &str) -> Self {
            Self {
                existing: vec![ticker.to_string()],
                ..Self::empty()
            }
        }

        fn failing_exists(error: RepositoryError) -> Self {
            Self {
                exists_failure: Some(error),
                ..Self::empty()
            }
        }

        fn failing_add(error: RepositoryError) -> Self {
            Self {
                add_failure: Some(error),
                ..Self::empty()
            }
        }

        fn exists_calls(&self) -> usize {
            self.exists_calls.load(Ordering::SeqCst)
        }

        fn add_calls(&self) -> usize {
            self.add_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StockRepository for MockStockRepository {
        async fn exists_by_ticker(&self, ticker: &TickerSymbol) -> RepositoryResult<bool> {
            self.exists_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = &self.exists_failure {
                return Err(err.clone());
            }
            Ok(self.existing.contains(&ticker.as_str().to_string()))
        }

        async fn add(&self, stock: &Stock) -> RepositoryResult<Stock> {
            self.add_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = &self.add_failure {
                return Err(err.clone());
            }
            Ok(stock.clone())
        }
    }

    #[tokio::test]
    async fn execute_success_normalizes_ticker() {
        let repo = Arc::new(MockStockRepository::empty());
        let use_case = AddStockUseCase::new(repo.clone());

        let response = use_case.execute(AddStockRequest::new("aapl")).await.unwrap();

        assert_eq!(response.ticker, "AAPL");
        assert!(!response.id.is_nil());
        assert_eq!(response.created_at, response.updated_at);
        assert_eq!(repo.exists_calls(), 1);
        assert_eq!(repo.add_calls(), 1);
    }

    #[tokio::test]
    async fn execute_duplicate_skips_persistence() {
        let repo = Arc::new(MockStockRepository::with_ticker("AAPL"));
        let use_case = AddStockUseCase::new(repo.clone());

        let result = use_case.execute(AddStockRequest::new("AAPL")).await;

        assert_eq!(
            result.unwrap_err(),
            StockApplicationError::AlreadyExists("AAPL".to_string())
        );
        assert_eq!(repo.add_calls(), 0);
    }

    #[tokio::test]
    async fn execute_invalid_ticker_skips_repository_entirely() {
        let repo = Arc::new(MockStockRepository::empty());
        let use_case = AddStockUseCase::new(repo.clone());

        let result = use_case.execute(AddStockRequest::new("")).await;

        let err = result.unwrap_err();
        assert!(matches!(err, StockApplicationError::Validation(ref m) if m.contains("required")));
        assert_eq!(repo.exists_calls(), 0);
        assert_eq!(repo.add_calls(), 0);
    }

    #[tokio::test]
    async fn execute_too_long_ticker_reports_length() {
        let repo = Arc::new(MockStockRepository::empty());
        let use_case = AddStockUseCase::new(repo.clone());

        let result = use_case.execute(AddStockRequest::new("TOOLONG")).await;

        let err = result.unwrap_err();
        assert!(matches!(err, StockApplicationError::Validation(ref m) if m.contains("at most 5")));
        assert_eq!(repo.exists_calls(), 0);
    }

    #[tokio::test]
    async fn execute_precheck_failure_is_hard_failure() {
        let repo = Arc::new(MockStockRepository::failing_exists(
            RepositoryError::storage("connection refused"),
        ));
        let use_case = AddStockUseCase::new(repo.clone());

        let result = use_case.execute(AddStockRequest::new("AAPL")).await;

        assert!(matches!(
            result.unwrap_err(),
            StockApplicationError::Storage(Some(ref m)) if m.contains("connection refused")
        ));
        assert_eq!(repo.add_calls(), 0);
    }

    #[tokio::test]
    async fn execute_insert_race_maps_to_already_exists() {
        // Pre-check passes, but a concurrent insert wins at the storage layer.
        let repo = Arc::new(MockStockRepository::failing_add(
            RepositoryError::AlreadyExists("AAPL".to_string()),
        ));
        let use_case = AddStockUseCase::new(repo.clone());

        let result = use_case.execute(AddStockRequest::new("aapl")).await;

        assert_eq!(
            result.unwrap_err(),
            StockApplicationError::AlreadyExists("AAPL".to_string())
        );
        assert_eq!(repo.exists_calls(), 1);
        assert_eq!(repo.add_calls(), 1);
    }

    #[tokio::test]
    async fn execute_persist_failure_maps_to_storage() {
        let repo = Arc::new(MockStockRepository::failing_add(RepositoryError::storage(
            "disk full",
        )));
        let use_case = AddStockUseCase::new(repo);

        let result = use_case.execute(AddStockRequest::new("AAPL")).await;

        assert!(matches!(
            result.unwrap_err(),
            StockApplicationError::Storage(Some(ref m)) if m.contains("disk full")
        ));
    }
}
