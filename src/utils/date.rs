//! Date helpers: canonical `YYYY-MM-DD` strings for storage, `Mon DD, YYYY`
//! for display.

use chrono::{Datelike, Duration, NaiveDate};

pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Today's date as a canonical string.
pub fn today() -> String {
    today_date().format(CANONICAL_FORMAT).to_string()
}

pub fn today_date() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Every date of the current month, ascending.
pub fn month_dates() -> Vec<String> {
    let today = today_date();
    month_dates_of(today.year(), today.month())
}

/// Every date of `year`-`month`, ascending. An invalid month yields nothing.
pub fn month_dates_of(year: i32, month: u32) -> Vec<String> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d.format(CANONICAL_FORMAT).to_string());
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

/// The `n` days strictly before `date`, most recent first.
///
/// A malformed `date` yields an empty list.
pub fn trailing_days(date: &str, n: usize) -> Vec<String> {
    let Some(start) = parse_date(date) else {
        return Vec::new();
    };

    (1..=n)
        .map_while(|i| start.checked_sub_signed(Duration::days(i as i64)))
        .map(|d| d.format(CANONICAL_FORMAT).to_string())
        .collect()
}

/// `2024-01-05` → `Jan 05, 2024`. Anything unparsable is returned as is.
pub fn to_display(date: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format(DISPLAY_FORMAT).to_string(),
        None => date.to_string(),
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), CANONICAL_FORMAT).ok()
}

/// Strict parse: the input must already be spelled canonically
/// (zero padded, no surrounding whitespace).
pub fn parse_canonical(s: &str) -> Option<NaiveDate> {
    let d = NaiveDate::parse_from_str(s, CANONICAL_FORMAT).ok()?;
    (d.format(CANONICAL_FORMAT).to_string() == s).then_some(d)
}
