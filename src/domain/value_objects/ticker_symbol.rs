//! # Ticker Symbol Value Object
//!
//! Exchange ticker symbol representation.
//!
//! This module provides the [`TickerSymbol`] type identifying a tradable
//! security: 1-5 uppercase ASCII letters (e.g., `AAPL`, `MSFT`, `F`).
//!
//! # Examples
//!
//! ```
//! use stock_registry::domain::value_objects::TickerSymbol;
//!
//! let ticker = TickerSymbol::new("aapl").unwrap();
//! assert_eq!(ticker.as_str(), "AAPL");
//! ```

use crate::domain::errors::validation::{
    FormatConstrained, FormatViolation, LengthConstrained, LengthViolation, RequiredConstrained,
    RequiredViolation, ValidationFailure,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for ticker symbol validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TickerSymbolError {
    /// Input was empty or whitespace-only.
    #[error("ticker symbol is required")]
    Empty {
        /// The raw value that was supplied.
        provided: String,
    },

    /// Input contains characters outside `A-Z` after normalization.
    #[error("ticker symbol must be 1-5 uppercase letters, got '{actual}'")]
    InvalidFormat {
        /// The trimmed offending value.
        actual: String,
    },

    /// Input is longer than five characters.
    #[error("ticker symbol must be at most 5 characters, got {actual_length}")]
    TooLong {
        /// The length of the trimmed input.
        actual_length: usize,
    },
}

impl LengthConstrained for TickerSymbolError {
    fn length_violation(&self) -> Option<LengthViolation> {
        match self {
            Self::TooLong { actual_length } => Some(LengthViolation {
                field: TickerSymbol::FIELD,
                min: Some(1),
                max: Some(TickerSymbol::MAX_LENGTH),
                actual: *actual_length,
            }),
            _ => None,
        }
    }
}

impl FormatConstrained for TickerSymbolError {
    fn format_violation(&self) -> Option<FormatViolation<'_>> {
        match self {
            Self::InvalidFormat { actual } => Some(FormatViolation {
                field: TickerSymbol::FIELD,
                expected: TickerSymbol::EXPECTED_FORMAT,
                actual,
            }),
            _ => None,
        }
    }
}

impl RequiredConstrained for TickerSymbolError {
    fn required_violation(&self) -> Option<RequiredViolation<'_>> {
        match self {
            Self::Empty { provided } => Some(RequiredViolation {
                field: TickerSymbol::FIELD,
                provided: Some(provided),
            }),
            _ => None,
        }
    }
}

impl ValidationFailure for TickerSymbolError {
    fn field(&self) -> &'static str {
        TickerSymbol::FIELD
    }
}

/// A validated exchange ticker symbol.
///
/// Stored normalized: trimmed and uppercased.
///
/// # Invariants
///
/// - Non-empty after trimming
/// - 1-5 characters
/// - Uppercase ASCII letters only
///
/// # Examples
///
/// ```
/// use stock_registry::domain::value_objects::TickerSymbol;
///
/// let ticker = TickerSymbol::new("  msft ").unwrap();
/// assert_eq!(ticker.to_string(), "MSFT");
///
/// // Already-valid values round-trip unchanged
/// let again = TickerSymbol::new(ticker.as_str()).unwrap();
/// assert_eq!(ticker, again);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TickerSymbol {
    value: String,
}

impl TickerSymbol {
    /// Maximum symbol length in characters.
    pub const MAX_LENGTH: usize = 5;

    /// Human-readable field label used in error reporting.
    pub const FIELD: &'static str = "ticker symbol";

    /// Expected-format description used in error reporting.
    pub const EXPECTED_FORMAT: &'static str = "1-5 uppercase letters";

    /// Creates a new ticker symbol from a raw string.
    ///
    /// The input is trimmed and uppercased before validation. Format is
    /// checked before length: an over-length input containing invalid
    /// characters reports [`TickerSymbolError::InvalidFormat`], not
    /// [`TickerSymbolError::TooLong`].
    ///
    /// # Errors
    ///
    /// Returns `TickerSymbolError` if the input is empty, contains
    /// characters outside `A-Z` after uppercasing, or is longer than
    /// five characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use stock_registry::domain::value_objects::{TickerSymbol, TickerSymbolError};
    ///
    /// assert_eq!(TickerSymbol::new("ibm").unwrap().as_str(), "IBM");
    /// assert!(matches!(
    ///     TickerSymbol::new("BRK.A"),
    ///     Err(TickerSymbolError::InvalidFormat { .. })
    /// ));
    /// assert!(matches!(
    ///     TickerSymbol::new("TOOLONG"),
    ///     Err(TickerSymbolError::TooLong { actual_length: 7 })
    /// ));
    /// ```
    pub fn new(value: impl AsRef<str>) -> Result<Self, TickerSymbolError> {
        let raw = value.as_ref();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(TickerSymbolError::Empty {
                provided: raw.to_string(),
            });
        }

        let normalized = trimmed.to_uppercase();

        // Format before length: mixed invalid input reports format.
        if !normalized.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(TickerSymbolError::InvalidFormat {
                actual: trimmed.to_string(),
            });
        }

        if normalized.len() > Self::MAX_LENGTH {
            return Err(TickerSymbolError::TooLong {
                actual_length: normalized.len(),
            });
        }

        Ok(Self { value: normalized })
    }

    /// Returns the normalized symbol string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for TickerSymbol {
    type Err = TickerSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TickerSymbol {
    type Error = TickerSymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TickerSymbol {
    type Error = TickerSymbolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TickerSymbol> for String {
    fn from(ticker: TickerSymbol) -> Self {
        ticker.value
    }
}

impl AsRef<str> for TickerSymbol {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
