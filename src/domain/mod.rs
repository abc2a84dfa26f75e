//! # Domain Layer
//!
//! Core business logic: value objects, the `Stock` aggregate, and the
//! domain error taxonomy.
//!
//! Everything in this layer is pure and side-effect-free; persistence and
//! transport concerns live in the outer layers.

pub mod entities;
pub mod errors;
pub mod value_objects;
