//! # SIC Code Value Object
//!
//! Standard Industrial Classification code representation.
//!
//! This module provides the [`SicCode`] type: a 4-digit numeric code in
//! the closed range [100, 9999]. Numeric inputs of fewer than four digits
//! are left-padded with zeros before range checking, so `"737"` becomes
//! `"0737"` while `"1"` normalizes to `"0001"` and is rejected as below
//! the minimum.
//!
//! # Examples
//!
//! ```
//! use stock_registry::domain::value_objects::SicCode;
//!
//! let code = SicCode::new("7372").unwrap();
//! assert_eq!(code.as_str(), "7372");
//!
//! // Short numeric input is zero-padded
//! let padded = SicCode::new("737").unwrap();
//! assert_eq!(padded.as_str(), "0737");
//! ```

use crate::domain::errors::validation::{
    FormatConstrained, FormatViolation, LengthConstrained, LengthViolation, RequiredConstrained,
    RequiredViolation, ValidationFailure,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for SIC code validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SicCodeError {
    /// Input was empty or whitespace-only.
    #[error("sic code is required")]
    Empty,

    /// Input is not 4 characters long (after zero-padding of short
    /// numeric inputs).
    #[error("sic code must be exactly 4 digits, got {actual_length} characters")]
    InvalidLength {
        /// The length of the trimmed, unpadded input.
        actual_length: usize,
    },

    /// Input contains non-digit characters.
    #[error("sic code must be numeric, got '{actual}'")]
    InvalidFormat {
        /// The trimmed offending value.
        actual: String,
    },

    /// Numeric value lies outside the closed range [100, 9999].
    #[error("sic code must be between 100 and 9999, got '{actual}'")]
    OutOfRange {
        /// The original trimmed input, for error-message fidelity.
        actual: String,
    },
}

impl LengthConstrained for SicCodeError {
    fn length_violation(&self) -> Option<LengthViolation> {
        match self {
            Self::InvalidLength { actual_length } => Some(LengthViolation {
                field: SicCode::FIELD,
                min: Some(SicCode::LENGTH),
                max: Some(SicCode::LENGTH),
                actual: *actual_length,
            }),
            _ => None,
        }
    }
}

impl FormatConstrained for SicCodeError {
    fn format_violation(&self) -> Option<FormatViolation<'_>> {
        match self {
            Self::InvalidFormat { actual } => Some(FormatViolation {
                field: SicCode::FIELD,
                expected: "4 numeric digits",
                actual,
            }),
            Self::OutOfRange { actual } => Some(FormatViolation {
                field: SicCode::FIELD,
                expected: "a numeric code between 100 and 9999",
                actual,
            }),
            _ => None,
        }
    }
}

impl RequiredConstrained for SicCodeError {
    fn required_violation(&self) -> Option<RequiredViolation<'_>> {
        match self {
            Self::Empty => Some(RequiredViolation {
                field: SicCode::FIELD,
                provided: None,
            }),
            _ => None,
        }
    }
}

impl ValidationFailure for SicCodeError {
    fn field(&self) -> &'static str {
        SicCode::FIELD
    }
}

/// A validated 4-digit Standard Industrial Classification code.
///
/// Stored as the zero-padded 4-character string.
///
/// # Invariants
///
/// - Exactly 4 characters, all ASCII digits
/// - Numeric value within [100, 9999] inclusive
///
/// Note the non-zero minimum: `"1"` pads to `"0001"`, which is four
/// digits yet still rejected as out of range.
///
/// # Examples
///
/// ```
/// use stock_registry::domain::value_objects::{SicCode, SicCodeError};
///
/// assert_eq!(SicCode::new("100").unwrap().as_str(), "0100");
/// assert!(matches!(SicCode::new("1"), Err(SicCodeError::OutOfRange { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SicCode {
    value: String,
}

impl SicCode {
    /// Canonical code length in digits.
    pub const LENGTH: usize = 4;

    /// Minimum valid numeric value, inclusive.
    pub const MIN: u16 = 100;

    /// Maximum valid numeric value, inclusive.
    pub const MAX: u16 = 9999;

    /// Human-readable field label used in error reporting.
    pub const FIELD: &'static str = "sic code";

    /// Creates a new SIC code from a raw string.
    ///
    /// All-digit inputs of 1-3 characters are left-padded with zeros to
    /// four digits before further checks; this is pure normalization, not
    /// validation. The range check then rejects padded values below 100.
    ///
    /// # Errors
    ///
    /// Returns `SicCodeError` if the input is empty, not 4 characters
    /// after padding, non-numeric, or outside [100, 9999].
    pub fn new(value: impl AsRef<str>) -> Result<Self, SicCodeError> {
        let trimmed = value.as_ref().trim();

        if trimmed.is_empty() {
            return Err(SicCodeError::Empty);
        }

        let all_digits = trimmed.chars().all(|c| c.is_ascii_digit());

        let padded = if all_digits && trimmed.len() < Self::LENGTH {
            format!("{:0>width$}", trimmed, width = Self::LENGTH)
        } else {
            trimmed.to_string()
        };

        if padded.len() != Self::LENGTH {
            // Report the length of the input as supplied, not the padded form.
            return Err(SicCodeError::InvalidLength {
                actual_length: trimmed.len(),
            });
        }

        if !all_digits {
            return Err(SicCodeError::InvalidFormat {
                actual: trimmed.to_string(),
            });
        }

        let numeric: u16 = padded.parse().map_err(|_| SicCodeError::InvalidFormat {
            actual: trimmed.to_string(),
        })?;

        if !(Self::MIN..=Self::MAX).contains(&numeric) {
            return Err(SicCodeError::OutOfRange {
                actual: trimmed.to_string(),
            });
        }

        Ok(Self { value: padded })
    }

    /// Returns the zero-padded 4-character code string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the numeric value of the code.
    #[must_use]
    pub fn as_u16(&self) -> u16 {
        // The stored value is always a validated 4-digit number.
        self.value.parse().unwrap_or(0)
    }
}

impl fmt::Display for SicCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for SicCode {
    type Err = SicCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SicCode {
    type Error = SicCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SicCode {
    type Error = SicCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SicCode> for String {
    fn from(code: SicCode) -> Self {
        code.value
    }
}

impl AsRef<str> for SicCode {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
