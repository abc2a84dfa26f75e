//! # Data Transfer Objects
//!
//! Request and response shapes consumed by transport adapters.

pub mod stock_dto;

pub use stock_dto::{AddStockRequest, AddStockResponse};
