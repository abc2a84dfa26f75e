//! # Grade Value Object
//!
//! Analyst letter grade for a stock.
//!
//! This module provides the [`Grade`] enum: the closed set A/B/C/D/F.
//! No modifiers ("A+", "A-") exist in this scheme.
//!
//! # Examples
//!
//! ```
//! use stock_registry::domain::value_objects::Grade;
//!
//! let grade = Grade::new("a").unwrap();
//! assert_eq!(grade, Grade::A);
//! assert_eq!(grade.as_str(), "A");
//! ```

use crate::domain::errors::validation::{
    FormatConstrained, FormatViolation, LengthConstrained, LengthViolation, RequiredConstrained,
    RequiredViolation, ValidationFailure,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for grade validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    /// Input was empty or whitespace-only.
    #[error("grade is required")]
    Empty,

    /// Input is not one of A, B, C, D, F.
    #[error("grade must be one of A, B, C, D, F, got '{provided}'")]
    InvalidValue {
        /// The raw value that was supplied.
        provided: String,
    },
}

impl LengthConstrained for GradeError {
    fn length_violation(&self) -> Option<LengthViolation> {
        None
    }
}

impl FormatConstrained for GradeError {
    fn format_violation(&self) -> Option<FormatViolation<'_>> {
        match self {
            Self::InvalidValue { provided } => Some(FormatViolation {
                field: Grade::FIELD,
                expected: "one of A, B, C, D, F",
                actual: provided,
            }),
            _ => None,
        }
    }
}

impl RequiredConstrained for GradeError {
    fn required_violation(&self) -> Option<RequiredViolation<'_>> {
        match self {
            Self::Empty => Some(RequiredViolation {
                field: Grade::FIELD,
                provided: None,
            }),
            _ => None,
        }
    }
}

impl ValidationFailure for GradeError {
    fn field(&self) -> &'static str {
        Grade::FIELD
    }
}

/// An analyst letter grade.
///
/// The set is closed: there is no `E` and no modifiers.
///
/// # Examples
///
/// ```
/// use stock_registry::domain::value_objects::{Grade, GradeError};
///
/// assert_eq!(Grade::new(" b ").unwrap(), Grade::B);
/// assert!(matches!(Grade::new("E"), Err(GradeError::InvalidValue { .. })));
/// assert!(matches!(Grade::new("A+"), Err(GradeError::InvalidValue { .. })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    /// Highest grade.
    A,
    /// Above average.
    B,
    /// Average.
    C,
    /// Below average.
    D,
    /// Failing grade.
    F,
}

impl Grade {
    /// Human-readable field label used in error reporting.
    pub const FIELD: &'static str = "grade";

    /// All members of the closed grade set.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::F];

    /// Creates a grade from a raw string.
    ///
    /// The input is trimmed and uppercased before matching against the
    /// closed set.
    ///
    /// # Errors
    ///
    /// Returns `GradeError` if the input is empty or not a member of
    /// {A, B, C, D, F}.
    pub fn new(value: impl AsRef<str>) -> Result<Self, GradeError> {
        let raw = value.as_ref();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(GradeError::Empty);
        }

        match trimmed.to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            _ => Err(GradeError::InvalidValue {
                provided: raw.to_string(),
            }),
        }
    }

    /// Returns the grade letter as a string slice.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Grade {
    type Error = GradeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Grade {
    type Error = GradeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.as_str().to_string()
    }
}
