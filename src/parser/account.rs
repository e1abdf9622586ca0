//! Keyword-based extraction of the payment account hint.

use crate::{expense::AccountKind, keyword::ACCOUNT_KEYWORDS};

/// Extracts the first account type whose keyword list has a hit.
///
/// Same first-match-wins scan as the category classifier, over the account
/// table. Unlike categories there is no catch-all: an utterance that does
/// not mention a payment method yields `None`.
pub fn extract_account(text: &str) -> Option<AccountKind> {
    let lowered = text.to_lowercase();

    ACCOUNT_KEYWORDS.iter().find_map(|(kind, keywords)| {
        keywords
            .iter()
            .any(|keyword| lowered.contains(keyword))
            .then_some(*kind)
    })
}
