//! The expense utterance parser: five independent extractors merged into
//! one [ParsedExpense] with an additive confidence score.

mod account;
mod amount;
mod category;
mod date;
mod description;

pub use category::suggest_categories;

use time::Date;

use crate::{
    Error,
    expense::{
        ACCOUNT_WEIGHT, AMOUNT_WEIGHT, CATEGORY_WEIGHT, DATE_WEIGHT, DESCRIPTION_WEIGHT,
        ParsedExpense,
    },
    timezone,
};

/// Parses a free-text expense utterance into a structured record.
///
/// The five extractors (amount and currency, description, category, account
/// hint, date) each run against the full input independently; no extractor's
/// result affects another's input. Fields that fail to extract are simply
/// absent and contribute nothing to the confidence score, so `parse` never
/// fails, even for empty or nonsensical input.
///
/// `today` is the reference date for resolving relative words such as 昨天;
/// callers normally obtain it from [local_date](crate::local_date).
///
/// ```
/// use expensetalk::parse;
/// use time::macros::date;
///
/// let result = parse("今天午餐花了150元吃牛肉麵", date!(2025 - 10 - 15));
///
/// assert_eq!(result.amount, Some(150.0));
/// assert_eq!(result.date, Some(date!(2025 - 10 - 15)));
/// assert!(result.confidence > 0.5);
/// ```
pub fn parse(text: &str, today: Date) -> ParsedExpense {
    let mut result = ParsedExpense::empty();

    if let Some((amount, currency)) = amount::extract_amount(text) {
        result.amount = Some(amount);
        result.currency = Some(currency);
        result.confidence += AMOUNT_WEIGHT;
    }

    if let Some(description) = description::extract_description(text) {
        result.description = Some(description);
        result.confidence += DESCRIPTION_WEIGHT;
    }

    if let Some(category) = category::extract_category(text) {
        result.category = Some(category);
        result.confidence += CATEGORY_WEIGHT;
    }

    if let Some(account) = account::extract_account(text) {
        result.account = Some(account);
        result.confidence += ACCOUNT_WEIGHT;
    }

    if let Some(date) = date::resolve_date(text, today) {
        result.date = Some(date);
        result.confidence += DATE_WEIGHT;
    }

    tracing::debug!(
        "parsed utterance {text:?}: amount={:?} category={:?} confidence={:.1}",
        result.amount,
        result.category,
        result.confidence
    );

    result
}

/// Parses an utterance using the current date in `canonical_timezone` as the
/// reference date.
///
/// # Errors
///
/// Returns [Error::InvalidTimezone] when `canonical_timezone` is not a valid
/// canonical timezone string such as `"Asia/Taipei"`.
pub fn parse_local(text: &str, canonical_timezone: &str) -> Result<ParsedExpense, Error> {
    let today = timezone::local_date(canonical_timezone)?;

    Ok(parse(text, today))
}
