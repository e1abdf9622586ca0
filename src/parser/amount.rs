//! Extraction of the monetary amount and its currency from an utterance.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    expense::Currency,
    keyword::{CURRENCY_KEYWORDS, HOME_CURRENCY},
};

/// The amount patterns, tried in priority order with the first match
/// winning.
///
/// The order is a deliberate tie-break: an utterance containing both a
/// currency unit and a generic spend verb ("花了100還有50元") must bind the
/// number to the currency-unit pattern, so the unit patterns come first,
/// then the foreign-currency words, then the bare spend-verb forms.
///
/// Digits are restricted to ASCII so that a full-width numeral cannot match
/// the pattern and then fail to parse.
static AMOUNT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(?:元|塊|台幣|NTD)",
        r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(?:美金|美元|USD)",
        r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(?:歐元|EUR)",
        r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(?:日圓|日幣|JPY)",
        r"([0-9]+(?:\.[0-9]+)?)\s*(?:錢|花費|支出)",
        r"花了\s*([0-9]+(?:\.[0-9]+)?)",
        r"付了\s*([0-9]+(?:\.[0-9]+)?)",
        r"用了\s*([0-9]+(?:\.[0-9]+)?)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("amount pattern must compile"))
    .collect()
});

/// Extracts the first recognized monetary expression from `text`.
///
/// The patterns are tried in priority order and only the first match's
/// number is used; any later numbers in the utterance are ignored. The
/// currency is then decided by scanning the whole text for foreign-currency
/// keywords, falling back to the home currency.
///
/// Returns `None` when no pattern matches or the captured number is not
/// strictly positive.
pub fn extract_amount(text: &str) -> Option<(f64, Currency)> {
    for pattern in AMOUNT_PATTERNS.iter() {
        let Some(captures) = pattern.captures(text) else {
            continue;
        };

        let number = captures.get(1)?.as_str();
        let amount: f64 = match number.parse() {
            Ok(amount) => amount,
            Err(error) => {
                tracing::debug!("could not parse captured amount {number:?}: {error}");
                return None;
            }
        };

        if amount <= 0.0 {
            tracing::debug!("rejecting non-positive amount {amount}");
            return None;
        }

        return Some((amount, scan_currency(text)));
    }

    None
}

/// Decides the currency for an utterance that contains an amount.
///
/// The whole text is scanned for foreign-currency keywords in the table's
/// declared order, independently of which amount pattern matched. The home
/// currency applies only when no foreign keyword is present anywhere, which
/// also keeps "美元" from being misread as the home currency via its "元"
/// suffix.
fn scan_currency(text: &str) -> Currency {
    let lowered = text.to_lowercase();

    for (currency, keywords) in CURRENCY_KEYWORDS {
        if *currency == HOME_CURRENCY {
            continue;
        }

        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *currency;
        }
    }

    HOME_CURRENCY
}

#[cfg(test)]
mod amount_tests {
    use super::extract_amount;
    use crate::expense::Currency;

    #[test]
    fn extracts_home_currency_unit_words() {
        assert_eq!(extract_amount("花了150元"), Some((150.0, Currency::Twd)));
        assert_eq!(extract_amount("付了200塊"), Some((200.0, Currency::Twd)));
        assert_eq!(extract_amount("300台幣的門票"), Some((300.0, Currency::Twd)));
    }

    #[test]
    fn extracts_foreign_currencies() {
        assert_eq!(extract_amount("用了50美金"), Some((50.0, Currency::Usd)));
        assert_eq!(extract_amount("花了100美元"), Some((100.0, Currency::Usd)));
        assert_eq!(extract_amount("20歐元的明信片"), Some((20.0, Currency::Eur)));
        assert_eq!(
            extract_amount("花了1000日圓"),
            Some((1000.0, Currency::Jpy))
        );
        assert_eq!(extract_amount("paid 30 USD"), Some((30.0, Currency::Usd)));
    }

    #[test]
    fn spend_verb_with_no_unit_defaults_to_home_currency() {
        assert_eq!(extract_amount("花了100"), Some((100.0, Currency::Twd)));
        assert_eq!(extract_amount("付了45.5"), Some((45.5, Currency::Twd)));
        assert_eq!(extract_amount("用了80"), Some((80.0, Currency::Twd)));
    }

    #[test]
    fn unit_pattern_outranks_spend_verb_pattern() {
        // Both a spend verb and a unit word appear with different numbers;
        // the unit pattern is higher priority so its number wins.
        assert_eq!(
            extract_amount("花了100還有50元"),
            Some((50.0, Currency::Twd))
        );
    }

    #[test]
    fn only_first_match_of_winning_pattern_is_used() {
        assert_eq!(
            extract_amount("花了100元，找回50元"),
            Some((100.0, Currency::Twd))
        );
    }

    #[test]
    fn parses_decimal_amounts() {
        assert_eq!(extract_amount("99.5元的飲料"), Some((99.5, Currency::Twd)));
    }

    #[test]
    fn rejects_zero_amounts() {
        assert_eq!(extract_amount("花了0元"), None);
        assert_eq!(extract_amount("0.0塊"), None);
    }

    #[test]
    fn no_monetary_expression_yields_nothing() {
        assert_eq!(extract_amount("今天去買東西"), None);
        assert_eq!(extract_amount(""), None);
        assert_eq!(extract_amount("150"), None);
    }
}
