//! Cleanup of the utterance into a human-readable expense description.

use std::sync::LazyLock;

use regex::Regex;

/// Matches an amount together with its currency or spend-noun suffix, e.g.
/// "150元", "50 美金", "100錢". Removed wholesale from the description.
static AMOUNT_BOILERPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[0-9]+(?:\.[0-9]+)?\s*(?:元|塊|台幣|NTD|美金|美元|USD|歐元|EUR|日圓|日幣|JPY|錢|花費|支出)",
    )
    .expect("amount boilerplate pattern must compile")
});

/// Matches the spend verbs that carry no descriptive content.
static SPEND_VERBS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:花了|買了|付了|用了|支出|花費)\s*").expect("spend verb pattern must compile")
});

static REPEATED_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

/// Strips amount and verb boilerplate from `text`, leaving the description.
///
/// When stripping leaves nothing (an all-filler utterance such as
/// "花了100元"), the raw input is returned verbatim so the record still has
/// a description. Only an empty input yields `None`.
pub fn extract_description(text: &str) -> Option<String> {
    let cleaned = AMOUNT_BOILERPLATE.replace_all(text, "");
    let cleaned = SPEND_VERBS.replace_all(&cleaned, "");
    let cleaned = REPEATED_WHITESPACE.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    if !cleaned.is_empty() {
        Some(cleaned.to_owned())
    } else if !text.is_empty() {
        Some(text.to_owned())
    } else {
        None
    }
}
