//! # Domain Entities
//!
//! Aggregate roots representing core business concepts.
//!
//! ## Aggregates
//!
//! - [`Stock`]: tradable security, the unit of persistence consistency

pub mod stock;

pub use stock::{FieldPatch, Stock, StockPatch};
