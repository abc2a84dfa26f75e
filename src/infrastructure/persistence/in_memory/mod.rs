//! # In-Memory Persistence
//!
//! HashMap-backed repository implementation for tests.

pub mod stock_repository;

pub use stock_repository::InMemoryStockRepository;
