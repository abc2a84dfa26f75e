//! # Domain Errors
//!
//! Typed error types for domain operations.
//!
//! Two layers live here:
//!
//! - [`validation`]: cross-cutting capability traits (length, format,
//!   required-field) implemented by every value-object error, enabling
//!   generic error reporting without matching concrete variants
//! - [`domain_error`]: the aggregate-level [`DomainError`] with numeric
//!   codes (1000-1999 validation, 2000-2999 state)

pub mod domain_error;
pub mod validation;

pub use domain_error::{DomainError, DomainResult};
pub use validation::{
    FormatConstrained, FormatViolation, LengthConstrained, LengthViolation, RequiredConstrained,
    RequiredViolation, ValidationFailure,
};
