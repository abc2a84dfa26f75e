//! # Persistence Layer
//!
//! Repository adapters implementing the application's
//! [`StockRepository`](crate::application::use_cases::StockRepository)
//! port.

pub mod in_memory;
pub mod postgres;
