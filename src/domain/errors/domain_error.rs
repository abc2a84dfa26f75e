//! # Domain Errors
//!
//! Typed domain error definitions.
//!
//! This module provides the [`DomainError`] enum for representing
//! domain-level errors with numeric error codes.
//!
//! # Error Code Ranges
//!
//! - **1000-1999**: Validation errors
//! - **2000-2999**: State errors
//!
//! # Examples
//!
//! ```
//! use stock_registry::domain::errors::DomainError;
//!
//! let error = DomainError::InvalidId("nil stock id".to_string());
//! assert_eq!(error.code(), 1005);
//! assert!(error.is_validation_error());
//! ```

use crate::domain::value_objects::{
    CompanyNameError, GradeError, SicCodeError, TickerSymbolError, Timestamp,
};
use thiserror::Error;

/// Domain-level error with numeric error codes.
///
/// Wraps the value-object errors so a single type can flow out of the
/// aggregate, while the concrete validator error stays reachable for
/// capability-based reporting.
///
/// # Error Code Ranges
///
/// | Range | Category |
/// |-------|----------|
/// | 1000-1999 | Validation errors |
/// | 2000-2999 | State errors |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (1000-1999)
    // ========================================================================
    /// Invalid ticker symbol.
    #[error("invalid ticker: {0}")]
    InvalidTicker(#[from] TickerSymbolError),

    /// Invalid company name.
    #[error("invalid company name: {0}")]
    InvalidName(#[from] CompanyNameError),

    /// Invalid SIC code.
    #[error("invalid sic code: {0}")]
    InvalidSicCode(#[from] SicCodeError),

    /// Invalid grade.
    #[error("invalid grade: {0}")]
    InvalidGrade(#[from] GradeError),

    /// Invalid aggregate identifier.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Creation timestamp is after the update timestamp.
    #[error("invalid timestamps: created_at {created_at} is after updated_at {updated_at}")]
    InvalidTimestamps {
        /// The creation timestamp supplied.
        created_at: Timestamp,
        /// The update timestamp supplied.
        updated_at: Timestamp,
    },

    // ========================================================================
    // State Errors (2000-2999)
    // ========================================================================
    /// A stock with this ticker already exists.
    #[error("stock already exists: {0}")]
    AlreadyExists(String),

    /// No stock with this ticker exists.
    #[error("stock not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Returns the numeric error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use stock_registry::domain::errors::DomainError;
    ///
    /// assert_eq!(DomainError::AlreadyExists("AAPL".to_string()).code(), 2001);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            // Validation errors (1000-1999)
            Self::InvalidTicker(_) => 1001,
            Self::InvalidName(_) => 1002,
            Self::InvalidSicCode(_) => 1003,
            Self::InvalidGrade(_) => 1004,
            Self::InvalidId(_) => 1005,
            Self::InvalidTimestamps { .. } => 1006,

            // State errors (2000-2999)
            Self::AlreadyExists(_) => 2001,
            Self::NotFound(_) => 2002,
        }
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.code() {
            1000..=1999 => "validation",
            2000..=2999 => "state",
            _ => "unknown",
        }
    }

    /// Returns true if this is a validation error.
    #[inline]
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self.code(), 1000..=1999)
    }

    /// Returns true if this is a state error.
    #[inline]
    #[must_use]
    pub const fn is_state_error(&self) -> bool {
        matches!(self.code(), 2000..=2999)
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
