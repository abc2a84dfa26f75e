//! # PostgreSQL Persistence
//!
//! sqlx-backed repository implementation.

pub mod stock_repository;

#[cfg(test)]
mod tests;

pub use stock_repository::PostgresStockRepository;
