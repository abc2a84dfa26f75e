//! # Stock Aggregate
//!
//! The tradable-security aggregate root.
//!
//! A [`Stock`] composes one mandatory value object (the ticker) with
//! three optional ones (name, SIC code, grade). It can only be built
//! through its validating constructors, and it is updated exclusively by
//! whole-field replacement via [`Stock::copy_with`]; fields are never
//! mutated in place.
//!
//! # Examples
//!
//! ```
//! use stock_registry::domain::entities::{FieldPatch, Stock, StockPatch};
//! use stock_registry::domain::value_objects::{CompanyName, TickerSymbol};
//!
//! let ticker = TickerSymbol::new("AAPL").unwrap();
//! let stock = Stock::create(ticker, None, None, None).unwrap();
//! assert_eq!(stock.created_at(), stock.updated_at());
//!
//! let name = CompanyName::new("Apple Inc.").unwrap();
//! let updated = stock.copy_with(StockPatch {
//!     name: FieldPatch::Set(name),
//!     ..StockPatch::default()
//! });
//! assert_eq!(updated.name().unwrap().as_str(), "Apple Inc.");
//! assert!(stock.name().is_none());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{
    CompanyName, Grade, SicCode, StockId, TickerSymbol, Timestamp,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Replacement instruction for one optional aggregate field.
///
/// `Keep` leaves the prior value in place, `Clear` sets the field to
/// absent, and `Set` replaces it with an already-validated value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch<T> {
    /// Retain the prior value.
    Keep,
    /// Set the field to absent.
    Clear,
    /// Replace the field with this value.
    Set(T),
}

// Not derived: the derive would require `T: Default`.
impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> FieldPatch<T> {
    /// Applies this patch to the current field value.
    #[must_use]
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }
}

/// Field replacements for [`Stock::copy_with`].
///
/// Defaults to keeping every field, so call sites only name what changes.
#[derive(Debug, Clone, Default)]
pub struct StockPatch {
    /// Replacement ticker, if any. The ticker is mandatory so it can be
    /// replaced but never cleared.
    pub ticker: Option<TickerSymbol>,
    /// Company name replacement.
    pub name: FieldPatch<CompanyName>,
    /// SIC code replacement.
    pub sic_code: FieldPatch<SicCode>,
    /// Grade replacement.
    pub grade: FieldPatch<Grade>,
}

/// A tradable security.
///
/// # Invariants
///
/// - The ticker is always present and valid
/// - Optional fields, when present, are valid value objects
/// - `created_at <= updated_at`
/// - The identifier is never nil
///
/// Value objects arrive already validated, so construction from them
/// cannot fail today; the fallible signature exists for the cross-field
/// checks performed at the persistence boundary
/// ([`Stock::from_parts`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StockRecord")]
pub struct Stock {
    /// Unique identifier for this stock.
    id: StockId,
    /// Exchange ticker symbol.
    ticker: TickerSymbol,
    /// Registered company name, if known.
    name: Option<CompanyName>,
    /// Standard Industrial Classification code, if known.
    sic_code: Option<SicCode>,
    /// Analyst grade, if assigned.
    grade: Option<Grade>,
    /// When this stock was created.
    created_at: Timestamp,
    /// When this stock was last updated.
    updated_at: Timestamp,
}

/// Wire shape of a serialized stock.
///
/// Deserialization goes through this record and then
/// [`Stock::from_parts`], so a payload with a nil identifier or
/// inconsistent timestamps is rejected instead of producing an
/// aggregate the constructors would never build.
#[derive(Debug, Deserialize)]
struct StockRecord {
    id: StockId,
    ticker: TickerSymbol,
    #[serde(default)]
    name: Option<CompanyName>,
    #[serde(default)]
    sic_code: Option<SicCode>,
    #[serde(default)]
    grade: Option<Grade>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl TryFrom<StockRecord> for Stock {
    type Error = DomainError;

    fn try_from(record: StockRecord) -> Result<Self, Self::Error> {
        Self::from_parts(
            record.id,
            record.ticker,
            record.name,
            record.sic_code,
            record.grade,
            record.created_at,
            record.updated_at,
        )
    }
}

impl Stock {
    /// Creates a new stock with a fresh identity and current timestamps.
    ///
    /// `created_at` and `updated_at` are both set to now.
    ///
    /// # Errors
    ///
    /// Cannot fail for freshly generated identity and timestamps; the
    /// signature is fallible to match [`Stock::from_parts`] and to
    /// accommodate future cross-field invariants.
    pub fn create(
        ticker: TickerSymbol,
        name: Option<CompanyName>,
        sic_code: Option<SicCode>,
        grade: Option<Grade>,
    ) -> DomainResult<Self> {
        let now = Timestamp::now();
        Self::from_parts(StockId::new_v4(), ticker, name, sic_code, grade, now, now)
    }

    /// Reconstructs a stock from persisted parts.
    ///
    /// Used by repository adapters when mapping storage rows back into
    /// the aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidId`] for a nil identifier, or
    /// [`DomainError::InvalidTimestamps`] when `created_at` is after
    /// `updated_at`.
    pub fn from_parts(
        id: StockId,
        ticker: TickerSymbol,
        name: Option<CompanyName>,
        sic_code: Option<SicCode>,
        grade: Option<Grade>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> DomainResult<Self> {
        if id.is_nil() {
            return Err(DomainError::InvalidId("stock id cannot be nil".to_string()));
        }

        if created_at > updated_at {
            return Err(DomainError::InvalidTimestamps {
                created_at,
                updated_at,
            });
        }

        Ok(Self {
            id,
            ticker,
            name,
            sic_code,
            grade,
            created_at,
            updated_at,
        })
    }

    /// Returns a new stock with the patched fields replaced.
    ///
    /// Fields not named in the patch retain their prior values; nothing
    /// is re-validated because a patch can only carry already-valid
    /// value objects. `updated_at` is bumped to now, `id` and
    /// `created_at` are preserved.
    #[must_use]
    pub fn copy_with(&self, patch: StockPatch) -> Self {
        Self {
            id: self.id,
            ticker: patch.ticker.unwrap_or_else(|| self.ticker.clone()),
            name: patch.name.apply(self.name.clone()),
            sic_code: patch.sic_code.apply(self.sic_code.clone()),
            grade: patch.grade.apply(self.grade),
            created_at: self.created_at,
            updated_at: Timestamp::now(),
        }
    }

    /// Returns the stock identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> StockId {
        self.id
    }

    /// Returns the ticker symbol.
    #[inline]
    #[must_use]
    pub const fn ticker(&self) -> &TickerSymbol {
        &self.ticker
    }

    /// Returns the company name, if known.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> Option<&CompanyName> {
        self.name.as_ref()
    }

    /// Returns the SIC code, if known.
    #[inline]
    #[must_use]
    pub const fn sic_code(&self) -> Option<&SicCode> {
        self.sic_code.as_ref()
    }

    /// Returns the grade, if assigned.
    #[inline]
    #[must_use]
    pub const fn grade(&self) -> Option<Grade> {
        self.grade
    }

    /// Returns when this stock was created.
    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when this stock was last updated.
    #[inline]
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stock {{ {} ({}) }}", self.ticker, self.id)
    }
}
