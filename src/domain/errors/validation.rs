//! # Validation Capability Traits
//!
//! Cross-cutting capability contracts shared by the value-object error
//! enums.
//!
//! Each value object defines its own closed error enum, matchable
//! exhaustively at call sites that need precision. Generic error-reporting
//! code instead branches on *capability*: whether the failure carries a
//! length constraint, a format constraint, or a missing required field.
//! Every value-object error implements all three traits, returning `Some`
//! only from the variants that actually carry that capability.
//!
//! # Examples
//!
//! ```
//! use stock_registry::domain::errors::validation::LengthConstrained;
//! use stock_registry::domain::value_objects::TickerSymbol;
//!
//! let err = TickerSymbol::new("TOOLONG").unwrap_err();
//! let violation = err.length_violation().unwrap();
//! assert_eq!(violation.field, "ticker symbol");
//! assert_eq!(violation.actual, 7);
//! assert_eq!(violation.max, Some(5));
//! ```

use std::error::Error;

/// A violated length constraint.
///
/// Exposes the optional minimum/maximum bounds, the length actually
/// observed, and a human-readable field label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthViolation {
    /// Human-readable field label (e.g., "ticker symbol").
    pub field: &'static str,
    /// Minimum allowed length, if the rule has one.
    pub min: Option<usize>,
    /// Maximum allowed length, if the rule has one.
    pub max: Option<usize>,
    /// The length actually observed.
    pub actual: usize,
}

/// A violated format constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatViolation<'a> {
    /// Human-readable field label.
    pub field: &'static str,
    /// Description of the expected format.
    pub expected: &'static str,
    /// The offending value as supplied (after normalization, if any).
    pub actual: &'a str,
}

/// A missing required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredViolation<'a> {
    /// Human-readable field label.
    pub field: &'static str,
    /// The value that was supplied, if any.
    pub provided: Option<&'a str>,
}

/// Capability: the error may carry a length constraint.
pub trait LengthConstrained {
    /// Returns the length violation, if this failure carries one.
    fn length_violation(&self) -> Option<LengthViolation>;
}

/// Capability: the error may carry a format constraint.
pub trait FormatConstrained {
    /// Returns the format violation, if this failure carries one.
    fn format_violation(&self) -> Option<FormatViolation<'_>>;
}

/// Capability: the error may represent a missing required field.
pub trait RequiredConstrained {
    /// Returns the required-field violation, if this failure carries one.
    fn required_violation(&self) -> Option<RequiredViolation<'_>>;
}

/// Umbrella contract implemented by every value-object error.
///
/// Combines the three capabilities with [`std::error::Error`] so generic
/// reporting code can accept any validation failure and render it without
/// matching concrete variants.
pub trait ValidationFailure:
    Error + LengthConstrained + FormatConstrained + RequiredConstrained
{
    /// The human-readable label of the field that failed validation.
    fn field(&self) -> &'static str;

    /// Renders a one-line constraint description from whichever
    /// capability this failure carries, falling back to the error's
    /// display string.
    fn constraint_summary(&self) -> String {
        if let Some(v) = self.required_violation() {
            return match v.provided {
                Some(p) => format!("{} is required (got {:?})", v.field, p),
                None => format!("{} is required", v.field),
            };
        }
        if let Some(v) = self.format_violation() {
            return format!("{} must be {} (got {:?})", v.field, v.expected, v.actual);
        }
        if let Some(v) = self.length_violation() {
            return match (v.min, v.max) {
                (Some(min), Some(max)) if min == max => format!(
                    "{} must be exactly {} characters (got {})",
                    v.field, min, v.actual
                ),
                (Some(min), Some(max)) => format!(
                    "{} must be {}-{} characters (got {})",
                    v.field, min, max, v.actual
                ),
                (None, Some(max)) => format!(
                    "{} must be at most {} characters (got {})",
                    v.field, max, v.actual
                ),
                (Some(min), None) => format!(
                    "{} must be at least {} characters (got {})",
                    v.field, min, v.actual
                ),
                (None, None) => format!("{} has an invalid length ({})", v.field, v.actual),
            };
        }
        self.to_string()
    }
}
