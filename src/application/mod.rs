//! # Application Layer
//!
//! Use case orchestration across validation, domain rules, and
//! persistence.
//!
//! ## Use Cases
//!
//! - [`AddStockUseCase`](use_cases::AddStockUseCase): register a new
//!   stock by ticker
//!
//! ## Contracts
//!
//! - [`StockRepository`](use_cases::StockRepository): persistence port
//!   implemented by the infrastructure layer

pub mod dto;
pub mod error;
pub mod use_cases;

pub use dto::{AddStockRequest, AddStockResponse};
pub use error::{ApplicationResult, StockApplicationError};
pub use use_cases::{AddStockUseCase, RepositoryError, RepositoryResult, StockRepository};
