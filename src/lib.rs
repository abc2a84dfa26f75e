//! # Stock Registry
//!
//! Core library for registering tradable securities identified by ticker.
//!
//! Every [`Stock`](domain::entities::Stock) observable through this crate
//! satisfies a fixed set of business rules: it is only constructible from
//! validated value objects, and every validation failure carries its exact
//! provenance through a closed, layered error taxonomy.
//!
//! ## Architecture
//!
//! This crate follows Domain-Driven Design with a layered architecture:
//!
//! - **Domain Layer** (`domain`): value objects, the `Stock` aggregate,
//!   and the domain error taxonomy with cross-cutting capability traits
//! - **Application Layer** (`application`): the add-stock use case, its
//!   repository port, DTOs, and application-level errors
//! - **Infrastructure Layer** (`infrastructure`): in-memory and
//!   PostgreSQL repository adapters
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use stock_registry::application::dto::AddStockRequest;
//! use stock_registry::application::use_cases::AddStockUseCase;
//! use stock_registry::infrastructure::persistence::in_memory::InMemoryStockRepository;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let repository = Arc::new(InMemoryStockRepository::new());
//! let use_case = AddStockUseCase::new(repository);
//!
//! let response = use_case
//!     .execute(AddStockRequest::new("aapl"))
//!     .await
//!     .unwrap();
//!
//! assert_eq!(response.ticker, "AAPL");
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
