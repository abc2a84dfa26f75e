//! # Use Cases
//!
//! Application-layer orchestration of business operations.
//!
//! - [`AddStockUseCase`]: register a new stock by ticker

pub mod add_stock;

pub use add_stock::{AddStockUseCase, RepositoryError, RepositoryResult, StockRepository};
