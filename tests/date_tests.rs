use chrono::{Datelike, NaiveDate};
use trackese::utils::date::{
    month_dates, month_dates_of, parse_canonical, to_display, today, today_date, trailing_days,
};

#[test]
fn test_trailing_days_crosses_leap_day() {
    assert_eq!(
        trailing_days("2024-03-02", 3),
        vec!["2024-03-01", "2024-02-29", "2024-02-28"]
    );
}

#[test]
fn test_trailing_days_crosses_year() {
    assert_eq!(
        trailing_days("2025-01-01", 2),
        vec!["2024-12-31", "2024-12-30"]
    );
}

#[test]
fn test_trailing_days_malformed_is_empty() {
    assert!(trailing_days("yesterday", 3).is_empty());
    assert!(trailing_days("2024-02-30", 3).is_empty());
}

#[test]
fn test_trailing_days_zero() {
    assert!(trailing_days("2024-03-02", 0).is_empty());
}

#[test]
fn test_month_dates_thirty_day_month() {
    let dates = month_dates_of(2024, 4);
    assert_eq!(dates.len(), 30);
    assert_eq!(dates.first().map(String::as_str), Some("2024-04-01"));
    assert_eq!(dates.last().map(String::as_str), Some("2024-04-30"));

    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(sorted, dates);
}

#[test]
fn test_month_dates_february() {
    assert_eq!(month_dates_of(2024, 2).len(), 29);
    assert_eq!(month_dates_of(2023, 2).len(), 28);
    assert_eq!(month_dates_of(2023, 12).len(), 31);
    assert!(month_dates_of(2023, 13).is_empty());
}

#[test]
fn test_month_dates_current_month() {
    let t = today_date();
    let dates = month_dates();

    let next_month_first = if t.month() == 12 {
        NaiveDate::from_ymd_opt(t.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(t.year(), t.month() + 1, 1)
    }
    .expect("valid date");
    let last = next_month_first.pred_opt().expect("valid date");

    assert_eq!(dates.len() as u32, last.day());
    assert!(dates.contains(&today()));
}

#[test]
fn test_to_display() {
    assert_eq!(to_display("2024-01-05"), "Jan 05, 2024");
    assert_eq!(to_display("2023-12-31"), "Dec 31, 2023");
    assert_eq!(to_display("not-a-date"), "not-a-date");
}

#[test]
fn test_parse_canonical_is_strict() {
    assert!(parse_canonical("2024-01-05").is_some());
    assert!(parse_canonical("2024-1-5").is_none());
    assert!(parse_canonical(" 2024-01-05").is_none());
    assert!(parse_canonical("2024-02-30").is_none());
}

#[test]
fn test_today_is_canonical() {
    assert!(parse_canonical(&today()).is_some());
}
