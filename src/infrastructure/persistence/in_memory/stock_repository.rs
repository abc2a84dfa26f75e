//! # In-Memory Stock Repository
//!
//! In-memory implementation of [`StockRepository`] for testing.
//!
//! This implementation uses a thread-safe `HashMap` keyed by ticker,
//! making it suitable for unit tests without database dependencies. The
//! insert-if-absent check under the write lock plays the role of the
//! database's uniqueness constraint.
//!
//! # Examples
//!
//! ```
//! use stock_registry::infrastructure::persistence::in_memory::InMemoryStockRepository;
//!
//! let repo = InMemoryStockRepository::new();
//! assert!(repo.is_empty());
//! ```

use crate::application::use_cases::add_stock::{
    RepositoryError, RepositoryResult, StockRepository,
};
use crate::domain::entities::Stock;
use crate::domain::value_objects::TickerSymbol;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory implementation of [`StockRepository`].
///
/// # Thread Safety
///
/// Uses `Arc<RwLock<HashMap>>` for thread-safe access; `add` holds the
/// write lock across the existence check and the insert, so concurrent
/// adds for the same ticker resolve deterministically with exactly one
/// winner.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStockRepository {
    storage: Arc<RwLock<HashMap<String, Stock>>>,
}

impl InMemoryStockRepository {
    /// Creates a new empty in-memory stock repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stocks in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        // Use try_read to avoid blocking in sync context
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the stored stock for a ticker, if any.
    pub async fn get(&self, ticker: &TickerSymbol) -> Option<Stock> {
        let storage = self.storage.read().await;
        storage.get(ticker.as_str()).cloned()
    }

    /// Clears all stocks from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

#[async_trait]
impl StockRepository for InMemoryStockRepository {
    async fn exists_by_ticker(&self, ticker: &TickerSymbol) -> RepositoryResult<bool> {
        let storage = self.storage.read().await;
        Ok(storage.contains_key(ticker.as_str()))
    }

    async fn add(&self, stock: &Stock) -> RepositoryResult<Stock> {
        let mut storage = self.storage.write().await;

        let key = stock.ticker().as_str().to_string();
        if storage.contains_key(&key) {
            return Err(RepositoryError::AlreadyExists(key));
        }

        debug!(ticker = %stock.ticker(), id = %stock.id(), "storing stock");
        storage.insert(key, stock.clone());
        Ok(stock.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_stock(ticker: &str) -> Stock {
        Stock::create(TickerSymbol::new(ticker).unwrap(), None, None, None).unwrap()
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryStockRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn add_then_exists() {
        let repo = InMemoryStockRepository::new();
        let stock = test_stock("AAPL");

        let stored = repo.add(&stock).await.unwrap();
        assert_eq!(stored, stock);

        let ticker = TickerSymbol::new("AAPL").unwrap();
        assert!(repo.exists_by_ticker(&ticker).await.unwrap());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn exists_is_false_for_unknown_ticker() {
        let repo = InMemoryStockRepository::new();
        let ticker = TickerSymbol::new("ZZZZ").unwrap();
        assert!(!repo.exists_by_ticker(&ticker).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected() {
        let repo = InMemoryStockRepository::new();
        repo.add(&test_stock("AAPL")).await.unwrap();

        let result = repo.add(&test_stock("AAPL")).await;
        assert_eq!(
            result.unwrap_err(),
            RepositoryError::AlreadyExists("AAPL".to_string())
        );
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn get_returns_stored_stock() {
        let repo = InMemoryStockRepository::new();
        let stock = test_stock("IBM");
        repo.add(&stock).await.unwrap();

        let ticker = TickerSymbol::new("IBM").unwrap();
        assert_eq!(repo.get(&ticker).await, Some(stock));
    }

    #[tokio::test]
    async fn clear_empties_the_repository() {
        let repo = InMemoryStockRepository::new();
        repo.add(&test_stock("AAPL")).await.unwrap();
        repo.add(&test_stock("MSFT")).await.unwrap();
        assert_eq!(repo.len(), 2);

        repo.clear().await;
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn concurrent_adds_have_one_winner() {
        let repo = Arc::new(InMemoryStockRepository::new());

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.add(&test_stock("RACE")).await })
            })
            .collect();

        let mut wins = 0;
        let mut conflicts = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => wins += 1,
                Err(RepositoryError::AlreadyExists(_)) => conflicts += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(wins, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(repo.len(), 1);
    }
}
