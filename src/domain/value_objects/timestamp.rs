//! # Timestamp Value Object
//!
//! UTC instant with millisecond precision.
//!
//! Wraps [`chrono::DateTime<Utc>`] so the rest of the domain never deals
//! with raw datetimes, and so persistence adapters have a single place to
//! convert to and from storage representations.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC instant.
///
/// # Examples
///
/// ```
/// use stock_registry::domain::value_objects::Timestamp;
///
/// let now = Timestamp::now();
/// let later = Timestamp::from_millis(now.timestamp_millis() + 1_000).unwrap();
/// assert!(later > now);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC instant.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from an existing datetime.
    #[inline]
    #[must_use]
    pub const fn new(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Creates a timestamp from milliseconds since the Unix epoch.
    ///
    /// Returns `None` if the value is out of the representable range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the inner datetime.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    #[inline]
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}
