//! Expensetalk converts free-text expense utterances (typed or
//! voice-transcribed) into structured expense records.
//!
//! The parser is a deterministic rule and keyword extractor, not an NLU
//! engine: five independent extractors (amount and currency, description,
//! category, account hint, date) run against the same input and their
//! partial results are merged with an additive confidence score. It is
//! synchronous, performs no I/O, and holds no mutable state, so it is safe
//! to call concurrently without coordination.
//!
//! ```
//! use expensetalk::{Category, Currency, parse, validate};
//! use time::macros::date;
//!
//! let result = parse("今天午餐花了150元吃牛肉麵", date!(2025 - 10 - 15));
//!
//! assert_eq!(result.amount, Some(150.0));
//! assert_eq!(result.currency, Some(Currency::Twd));
//! assert_eq!(result.category, Some(Category::Food));
//! assert!(validate(&result).is_valid);
//! ```

#![warn(missing_docs)]

mod expense;
mod keyword;
mod parser;
mod timezone;
mod validation;

pub use expense::{
    ACCOUNT_WEIGHT, AMOUNT_WEIGHT, AccountKind, CATEGORY_WEIGHT, Category, Currency, DATE_WEIGHT,
    DESCRIPTION_WEIGHT, ParsedExpense,
};
pub use keyword::{ACCOUNT_KEYWORDS, CATEGORY_KEYWORDS, CURRENCY_KEYWORDS, HOME_CURRENCY};
pub use parser::{parse, parse_local, suggest_categories};
pub use timezone::local_date;
pub use validation::{MIN_CONFIDENCE, Validation, validate};

/// The errors that may occur in the library.
///
/// Parsing itself never fails; absence of a field is the only failure
/// signal. The only fallible operation is looking up the local date for a
/// timezone.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The string is not a valid canonical timezone.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}
