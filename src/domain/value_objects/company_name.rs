//! # Company Name Value Object
//!
//! Registered company name representation.
//!
//! This module provides the [`CompanyName`] type: a trimmed,
//! whitespace-collapsed name of 1-255 characters drawn from letters,
//! digits, spaces, and the punctuation set `. , ' - & ( )`.
//!
//! # Examples
//!
//! ```
//! use stock_registry::domain::value_objects::CompanyName;
//!
//! let name = CompanyName::new("  Apple   Inc. ").unwrap();
//! assert_eq!(name.as_str(), "Apple Inc.");
//! ```

use crate::domain::errors::validation::{
    FormatConstrained, FormatViolation, LengthConstrained, LengthViolation, RequiredConstrained,
    RequiredViolation, ValidationFailure,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for company name validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompanyNameError {
    /// Input was empty after normalization.
    #[error("company name is required")]
    Empty,

    /// Normalized input exceeds 255 characters.
    #[error("company name must be at most {max_length} characters, got {actual_length}")]
    TooLong {
        /// The character count of the normalized input.
        actual_length: usize,
        /// The maximum allowed character count.
        max_length: usize,
    },

    /// Input contains no alphanumeric character.
    #[error("company name must contain at least one letter or digit, got '{actual}'")]
    NoAlphanumeric {
        /// The normalized offending value.
        actual: String,
    },

    /// Input contains a character outside the allowed set.
    #[error("company name may only contain letters, digits, spaces, and . , ' - & ( ), got '{actual}'")]
    InvalidCharacters {
        /// The normalized offending value.
        actual: String,
    },
}

impl LengthConstrained for CompanyNameError {
    fn length_violation(&self) -> Option<LengthViolation> {
        match self {
            Self::TooLong {
                actual_length,
                max_length,
            } => Some(LengthViolation {
                field: CompanyName::FIELD,
                min: Some(1),
                max: Some(*max_length),
                actual: *actual_length,
            }),
            _ => None,
        }
    }
}

impl FormatConstrained for CompanyNameError {
    fn format_violation(&self) -> Option<FormatViolation<'_>> {
        match self {
            Self::NoAlphanumeric { actual } => Some(FormatViolation {
                field: CompanyName::FIELD,
                expected: "a name containing at least one letter or digit",
                actual,
            }),
            Self::InvalidCharacters { actual } => Some(FormatViolation {
                field: CompanyName::FIELD,
                expected: CompanyName::EXPECTED_FORMAT,
                actual,
            }),
            _ => None,
        }
    }
}

impl RequiredConstrained for CompanyNameError {
    fn required_violation(&self) -> Option<RequiredViolation<'_>> {
        match self {
            Self::Empty => Some(RequiredViolation {
                field: CompanyName::FIELD,
                provided: None,
            }),
            _ => None,
        }
    }
}

impl ValidationFailure for CompanyNameError {
    fn field(&self) -> &'static str {
        CompanyName::FIELD
    }
}

/// A validated, normalized company name.
///
/// Normalization trims the input and collapses internal whitespace runs
/// to single spaces; the stored value is always in normalized form.
///
/// # Invariants
///
/// - 1-255 characters after normalization
/// - Contains at least one alphanumeric character
/// - Characters restricted to letters, digits, space, and `. , ' - & ( )`
///
/// # Examples
///
/// ```
/// use stock_registry::domain::value_objects::CompanyName;
///
/// let name = CompanyName::new("Johnson & Johnson").unwrap();
/// assert_eq!(name.to_string(), "Johnson & Johnson");
///
/// assert!(CompanyName::new("O'Reilly (Auto), Inc.").is_ok());
/// assert!(CompanyName::new("Bad*Name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompanyName {
    value: String,
}

impl CompanyName {
    /// Maximum name length in characters after normalization.
    pub const MAX_LENGTH: usize = 255;

    /// Human-readable field label used in error reporting.
    pub const FIELD: &'static str = "company name";

    /// Expected-format description used in error reporting.
    pub const EXPECTED_FORMAT: &'static str =
        "letters, digits, spaces, and . , ' - & ( )";

    /// Creates a new company name from a raw string.
    ///
    /// # Errors
    ///
    /// Returns `CompanyNameError` if the normalized input is empty,
    /// longer than 255 characters, contains no alphanumeric character,
    /// or contains a character outside the allowed set.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CompanyNameError> {
        let normalized = Self::normalize(value.as_ref());

        if normalized.is_empty() {
            return Err(CompanyNameError::Empty);
        }

        let length = normalized.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(CompanyNameError::TooLong {
                actual_length: length,
                max_length: Self::MAX_LENGTH,
            });
        }

        if !normalized.chars().any(char::is_alphanumeric) {
            return Err(CompanyNameError::NoAlphanumeric { actual: normalized });
        }

        if !normalized.chars().all(Self::is_allowed_char) {
            return Err(CompanyNameError::InvalidCharacters { actual: normalized });
        }

        Ok(Self { value: normalized })
    }

    /// Returns the normalized name string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Trims and collapses internal whitespace runs to single spaces.
    fn normalize(raw: &str) -> String {
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn is_allowed_char(c: char) -> bool {
        c.is_alphanumeric() || matches!(c, ' ' | '.' | ',' | '\'' | '-' | '&' | '(' | ')')
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for CompanyName {
    type Err = CompanyNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CompanyName {
    type Error = CompanyNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CompanyName {
    type Error = CompanyNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CompanyName> for String {
    fn from(name: CompanyName) -> Self {
        name.value
    }
}

impl AsRef<str> for CompanyName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
