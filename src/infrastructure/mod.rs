//! # Infrastructure Layer
//!
//! External adapters: persistence implementations of the application's
//! repository port.

pub mod persistence;
