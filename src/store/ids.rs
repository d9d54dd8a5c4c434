//! Numeric student id input: single ids, `start-end` ranges, and
//! comma-separated mixes of both.

use crate::errors::{AppError, AppResult};

pub fn parse_id(s: &str) -> AppResult<i64> {
    let t = s.trim();
    t.parse::<i64>()
        .map_err(|_| AppError::InvalidStudentId(format!("'{t}' is not a number")))
}

/// `"1-5, 8, 10-12"` → `[(1, 5), (8, 8), (10, 12)]`.
///
/// Empty parts are ignored; a part with more than one `-` is rejected.
pub fn parse_id_list(text: &str) -> AppResult<Vec<(i64, i64)>> {
    let mut out = Vec::new();

    for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((start, end)) => {
                if end.contains('-') {
                    return Err(AppError::InvalidStudentId(format!(
                        "'{part}' is not a valid range"
                    )));
                }
                out.push((parse_id(start)?, parse_id(end)?));
            }
            None => {
                let id = parse_id(part)?;
                out.push((id, id));
            }
        }
    }

    if out.is_empty() {
        return Err(AppError::InvalidStudentId("no student ids given".to_string()));
    }

    Ok(out)
}
