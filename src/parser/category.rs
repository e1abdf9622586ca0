//! Keyword-based classification of an utterance into an expense category.

use crate::{expense::Category, keyword::CATEGORY_KEYWORDS};

/// Classifies `text` into the first category whose keyword list has a hit.
///
/// The scan is case-insensitive and short-circuits on the first matching
/// category in table order; there is no scoring across categories. Returns
/// `None` when no keyword matches, leaving the caller to decide whether to
/// store the record as uncategorized or as the catch-all.
pub fn extract_category(text: &str) -> Option<Category> {
    let lowered = text.to_lowercase();

    CATEGORY_KEYWORDS.iter().find_map(|(category, keywords)| {
        keywords
            .iter()
            .any(|keyword| lowered.contains(keyword))
            .then_some(*category)
    })
}

/// Suggests every category whose keyword list matches `description`, in
/// table order.
///
/// Always returns at least one suggestion: when nothing matches, the
/// catch-all [Category::Other] is suggested so UI autocomplete never shows
/// an empty list.
pub fn suggest_categories(description: &str) -> Vec<Category> {
    let lowered = description.to_lowercase();

    let suggestions: Vec<Category> = CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(category, _)| *category)
        .collect();

    if suggestions.is_empty() {
        vec![Category::Other]
    } else {
        suggestions
    }
}

#[cfg(test)]
mod category_tests {
    use super::{extract_category, suggest_categories};
    use crate::expense::Category;

    #[test]
    fn classifies_sample_utterances() {
        let cases = [
            ("吃午餐", Category::Food),
            ("加油", Category::Transport),
            ("買衣服", Category::Shopping),
            ("看電影", Category::Entertainment),
            ("看醫生", Category::Medical),
            ("買書", Category::Education),
            ("繳房租", Category::Living),
        ];

        for (text, expected) in cases {
            assert_eq!(extract_category(text), Some(expected), "input {text:?}");
        }
    }

    #[test]
    fn latin_keywords_match_case_insensitively() {
        assert_eq!(extract_category("搭Uber回家"), Some(Category::Transport));
        assert_eq!(extract_category("去KTV唱歌"), Some(Category::Entertainment));
    }

    #[test]
    fn first_category_in_table_order_wins() {
        // Both a Food keyword (午餐) and an Entertainment keyword (電影)
        // appear; Food is declared earlier so it wins.
        assert_eq!(
            extract_category("午餐後去看電影"),
            Some(Category::Food)
        );
    }

    #[test]
    fn bare_buy_verb_is_not_a_shopping_keyword() {
        assert_eq!(extract_category("今天去買東西"), None);
    }

    #[test]
    fn no_keyword_yields_no_category() {
        assert_eq!(extract_category("嗯嗯嗯"), None);
        assert_eq!(extract_category(""), None);
    }

    #[test]
    fn suggestions_follow_keyword_hits() {
        let suggestions = suggest_categories("今天去餐廳吃飯");
        assert!(suggestions.contains(&Category::Food));
    }

    #[test]
    fn suggestions_list_every_matching_category_in_order() {
        let suggestions = suggest_categories("午餐後去看電影");
        assert_eq!(
            suggestions,
            vec![Category::Food, Category::Entertainment]
        );
    }

    #[test]
    fn suggestions_default_to_the_catch_all() {
        assert_eq!(suggest_categories("買了一些東西"), vec![Category::Other]);
        assert_eq!(suggest_categories(""), vec![Category::Other]);
    }
}
