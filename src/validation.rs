//! Advisory validation of parse results before committing a record.

use serde::{Deserialize, Serialize};

use crate::expense::ParsedExpense;

/// The minimum confidence a parse result needs before it is considered
/// trustworthy enough to commit without review.
pub const MIN_CONFIDENCE: f64 = 0.5;

/// The outcome of validating a [ParsedExpense].
///
/// `errors` holds user-facing reasons in the application's language; an
/// empty list means the result is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// Whether the parse result is complete enough to commit as a record.
    pub is_valid: bool,
    /// Human-readable reasons the result failed validation.
    pub errors: Vec<String>,
}

/// Checks whether a parse result is complete enough to store as an expense
/// record.
///
/// Validation is advisory: it reports plain-language reasons rather than
/// failing, and the caller decides whether to block record creation or
/// accept a low-confidence guess anyway. A valid result has a strictly
/// positive amount, a non-blank description, and a confidence of at least
/// [MIN_CONFIDENCE].
pub fn validate(parsed: &ParsedExpense) -> Validation {
    let mut errors = Vec::new();

    if !parsed.amount.is_some_and(|amount| amount > 0.0) {
        errors.push("金額必須大於 0".to_owned());
    }

    let has_description = parsed
        .description
        .as_ref()
        .is_some_and(|description| !description.trim().is_empty());
    if !has_description {
        errors.push("描述不能為空".to_owned());
    }

    if parsed.confidence < MIN_CONFIDENCE {
        errors.push("解析信心度過低，請檢查輸入".to_owned());
    }

    Validation {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod validation_tests {
    use super::validate;
    use crate::expense::ParsedExpense;

    #[test]
    fn complete_result_is_valid() {
        let parsed = ParsedExpense {
            amount: Some(100.0),
            description: Some("測試".to_owned()),
            confidence: 0.8,
            ..ParsedExpense::empty()
        };

        let validation = validate(&parsed);

        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
    }

    #[test]
    fn missing_fields_produce_one_error_each() {
        let parsed = ParsedExpense {
            amount: Some(0.0),
            description: Some("".to_owned()),
            confidence: 0.2,
            ..ParsedExpense::empty()
        };

        let validation = validate(&parsed);

        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            vec![
                "金額必須大於 0".to_owned(),
                "描述不能為空".to_owned(),
                "解析信心度過低，請檢查輸入".to_owned(),
            ]
        );
    }

    #[test]
    fn blank_description_is_rejected() {
        let parsed = ParsedExpense {
            amount: Some(50.0),
            description: Some("   ".to_owned()),
            confidence: 0.6,
            ..ParsedExpense::empty()
        };

        let validation = validate(&parsed);

        assert!(!validation.is_valid);
        assert_eq!(validation.errors, vec!["描述不能為空".to_owned()]);
    }

    #[test]
    fn confidence_at_the_threshold_is_accepted() {
        let parsed = ParsedExpense {
            amount: Some(50.0),
            description: Some("午餐".to_owned()),
            confidence: 0.5,
            ..ParsedExpense::empty()
        };

        assert!(validate(&parsed).is_valid);
    }
}
