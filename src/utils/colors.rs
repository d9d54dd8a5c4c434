//! ANSI color helper utilities for table output.
//! Nothing is coloured when `NO_COLOR` is set.
use crate::models::Mark;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

fn enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn paint(color: &str, text: &str) -> String {
    if enabled() && color != RESET {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Present → green, Absent → red, unmarked → grey.
pub fn color_for_mark(mark: Option<Mark>) -> &'static str {
    match mark {
        Some(Mark::Present) => GREEN,
        Some(Mark::Absent) => RED,
        None => GREY,
    }
}

/// Colour an already padded cell according to the mark it shows.
pub fn colorize_mark(cell: &str, padded: String) -> String {
    let mark = Mark::from_cell(cell);
    if mark.is_none() && !cell.trim().is_empty() {
        return padded;
    }
    paint(color_for_mark(mark), &padded)
}

/// Attendance rate colour: at least 75% green, below 50% red.
pub fn color_for_rate(present: usize, marked: usize) -> &'static str {
    if marked == 0 {
        return GREY;
    }
    let rate = present * 100 / marked;
    if rate >= 75 {
        GREEN
    } else if rate < 50 {
        RED
    } else {
        RESET
    }
}
