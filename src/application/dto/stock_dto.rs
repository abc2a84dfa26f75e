//! # Stock DTOs
//!
//! Data transfer objects for stock operations.
//!
//! These DTOs decouple transport adapters from the domain layer: requests
//! carry raw strings (validated by the use case), responses carry the
//! projection of the persisted aggregate.

use crate::domain::entities::Stock;
use crate::domain::value_objects::{StockId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request to register a new stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddStockRequest {
    /// Raw ticker symbol as supplied by the caller; validated and
    /// normalized by the use case.
    pub ticker: String,
}

impl AddStockRequest {
    /// Creates a new AddStockRequest.
    #[must_use]
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
        }
    }
}

impl fmt::Display for AddStockRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddStockRequest {{ ticker: {} }}", self.ticker)
    }
}

/// Response after registering a stock.
///
/// Projects the persisted aggregate, which may carry storage-assigned
/// identity and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddStockResponse {
    /// The identifier of the persisted stock.
    pub id: StockId,
    /// The normalized ticker symbol.
    pub ticker: String,
    /// When the stock was created.
    pub created_at: Timestamp,
    /// When the stock was last updated.
    pub updated_at: Timestamp,
}

impl AddStockResponse {
    /// Projects a persisted stock into a response.
    #[must_use]
    pub fn from_stock(stock: &Stock) -> Self {
        Self {
            id: stock.id(),
            ticker: stock.ticker().as_str().to_string(),
            created_at: stock.created_at(),
            updated_at: stock.updated_at(),
        }
    }
}
