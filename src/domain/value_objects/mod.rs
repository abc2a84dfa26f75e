//! # Value Objects
//!
//! Immutable, self-validating wrappers around primitive values.
//!
//! Each type in this module can only be constructed through its validating
//! factory, so a value of one of these types is proof that the underlying
//! string satisfies the corresponding business rule.
//!
//! ## Identity Types
//!
//! - [`StockId`]: UUID-based stock identifier
//!
//! ## Validated Strings
//!
//! - [`TickerSymbol`]: 1-5 uppercase ASCII letters
//! - [`CompanyName`]: normalized company name, 1-255 characters
//! - [`SicCode`]: 4-digit Standard Industrial Classification code
//!
//! ## Domain Enums
//!
//! - [`Grade`]: analyst grade, one of A/B/C/D/F
//!
//! ## Time
//!
//! - [`Timestamp`]: UTC instant with millisecond precision

pub mod company_name;
pub mod grade;
pub mod ids;
pub mod sic_code;
pub mod ticker_symbol;
pub mod timestamp;

pub use company_name::{CompanyName, CompanyNameError};
pub use grade::{Grade, GradeError};
pub use ids::StockId;
pub use sic_code::{SicCode, SicCodeError};
pub use ticker_symbol::{TickerSymbol, TickerSymbolError};
pub use timestamp::Timestamp;
