//! Resolution of relative-day words, weekday words, and numeric dates.

use std::sync::LazyLock;

use regex::Regex;
use time::{Date, Duration, Month, Weekday};

const TODAY_WORDS: &[&str] = &["今天", "今日"];
const YESTERDAY_WORDS: &[&str] = &["昨天", "昨日"];
const TOMORROW_WORDS: &[&str] = &["明天", "明日"];

/// Weekday words in scan order, short forms before long forms.
const WEEKDAY_WORDS: &[(&str, Weekday)] = &[
    ("週一", Weekday::Monday),
    ("週二", Weekday::Tuesday),
    ("週三", Weekday::Wednesday),
    ("週四", Weekday::Thursday),
    ("週五", Weekday::Friday),
    ("週六", Weekday::Saturday),
    ("週日", Weekday::Sunday),
    ("星期一", Weekday::Monday),
    ("星期二", Weekday::Tuesday),
    ("星期三", Weekday::Wednesday),
    ("星期四", Weekday::Thursday),
    ("星期五", Weekday::Friday),
    ("星期六", Weekday::Saturday),
    ("星期日", Weekday::Sunday),
];

/// Year-month-day, e.g. "2025年6月10日" or "2025-6-10".
static YEAR_MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})[年-]([0-9]{1,2})[月-]([0-9]{1,2})日?")
        .expect("year-month-day pattern must compile")
});

/// Month-day with the year left implicit, e.g. "6月10日".
static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})[月-]([0-9]{1,2})日?").expect("month-day pattern must compile")
});

/// Slash-separated month/day, e.g. "6/10".
static SLASH_MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})/([0-9]{1,2})").expect("slash month-day pattern must compile")
});

/// Resolves the calendar date an utterance refers to, relative to `today`.
///
/// Ordered checks, first match wins: today/yesterday/tomorrow words, then
/// weekday words, then explicit numeric dates. A weekday word resolves
/// within the current Monday-based week, which can land in the past ("週一"
/// said on a Wednesday is two days ago); there is no next-occurrence
/// rollover. Numeric dates that do not exist on the calendar (6月31日) are
/// discarded. Returns `None` when nothing matches, leaving the caller to
/// default to the current date.
pub fn resolve_date(text: &str, today: Date) -> Option<Date> {
    if TODAY_WORDS.iter().any(|word| text.contains(word)) {
        return Some(today);
    }

    if YESTERDAY_WORDS.iter().any(|word| text.contains(word)) {
        return today.previous_day();
    }

    if TOMORROW_WORDS.iter().any(|word| text.contains(word)) {
        return today.next_day();
    }

    for (word, weekday) in WEEKDAY_WORDS {
        if text.contains(word) {
            return same_week_date(today, *weekday);
        }
    }

    resolve_numeric_date(text, today.year())
}

/// The date within `today`'s Monday-based week that falls on `weekday`.
fn same_week_date(today: Date, weekday: Weekday) -> Option<Date> {
    let offset = i64::from(weekday.number_days_from_monday())
        - i64::from(today.weekday().number_days_from_monday());

    today.checked_add(Duration::days(offset))
}

/// Tries the numeric date patterns in priority order.
///
/// A pattern that matches but constructs an invalid date falls through to
/// the next pattern rather than aborting resolution.
fn resolve_numeric_date(text: &str, current_year: i32) -> Option<Date> {
    if let Some(captures) = YEAR_MONTH_DAY.captures(text) {
        let date = build_date(
            captures[1].parse().ok()?,
            &captures[2],
            &captures[3],
        );
        if date.is_some() {
            return date;
        }
        tracing::debug!("discarding invalid explicit date in {text:?}");
    }

    if let Some(captures) = MONTH_DAY.captures(text) {
        let date = build_date(current_year, &captures[1], &captures[2]);
        if date.is_some() {
            return date;
        }
        tracing::debug!("discarding invalid month-day date in {text:?}");
    }

    if let Some(captures) = SLASH_MONTH_DAY.captures(text) {
        let date = build_date(current_year, &captures[1], &captures[2]);
        if date.is_some() {
            return date;
        }
        tracing::debug!("discarding invalid slash date in {text:?}");
    }

    None
}

/// Builds a date from captured components, rejecting impossible calendar
/// dates such as month 13 or day 31 in a 30-day month.
fn build_date(year: i32, month: &str, day: &str) -> Option<Date> {
    let month = Month::try_from(month.parse::<u8>().ok()?).ok()?;
    let day = day.parse::<u8>().ok()?;

    Date::from_calendar_date(year, month, day).ok()
}
