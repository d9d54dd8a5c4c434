use crate::errors::{AppError, AppResult, ParseWarning};
use crate::models::{AttendanceSheet, Mark, Section};
use crate::store::AttendanceStore;
use crate::utils::date;

/// A student still waiting for a mark, with the marks of the previous days.
#[derive(Debug, Clone)]
pub struct PendingStudent {
    pub id: String,
    /// `(date, mark)` for the lookback window, most recent first.
    pub history: Vec<(String, Option<Mark>)>,
}

#[derive(Debug, Clone, Default)]
pub struct Pending {
    pub total_students: usize,
    pub students: Vec<PendingStudent>,
    pub warnings: Vec<ParseWarning>,
}

pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Students of `section` without a mark on `day`, in sheet order.
    pub fn pending(
        store: &AttendanceStore,
        section: &Section,
        day: &str,
        lookback_days: usize,
    ) -> AppResult<Pending> {
        let loaded = store.load(section)?;
        let window = date::trailing_days(day, lookback_days);

        let students = loaded
            .sheet
            .unmarked_on(day)
            .into_iter()
            .map(|s| PendingStudent {
                id: s.id.clone(),
                history: window.iter().map(|d| (d.clone(), s.mark_on(d))).collect(),
            })
            .collect();

        Ok(Pending {
            total_students: loaded.sheet.students.len(),
            students,
            warnings: loaded.warnings,
        })
    }

    /// Marks to apply for `mark`: either the given ids, or every student
    /// still unmarked on `day` when `remaining` is set.
    pub fn collect_marks(
        sheet: &AttendanceSheet,
        day: &str,
        ids: &[String],
        remaining: bool,
        mark: Mark,
    ) -> AppResult<Vec<(String, String, Mark)>> {
        let targets: Vec<String> = if remaining {
            sheet
                .unmarked_on(day)
                .into_iter()
                .map(|s| s.id.clone())
                .chain(ids.iter().cloned())
                .collect()
        } else {
            ids.to_vec()
        };

        let mut out: Vec<(String, String, Mark)> = Vec::with_capacity(targets.len());
        for id in targets {
            let id = id.trim().to_string();
            if id.is_empty() {
                return Err(AppError::InvalidStudentId("empty id".to_string()));
            }
            if !out.iter().any(|(_, existing, _)| *existing == id) {
                out.push((day.to_string(), id, mark));
            }
        }

        Ok(out)
    }

    /// Columns of the history view: all dates, or only `day` when given.
    pub fn history_columns(sheet: &AttendanceSheet, day: Option<&str>) -> Vec<String> {
        match day {
            Some(d) => vec![d.to_string()],
            None => sheet.dates.clone(),
        }
    }

    /// `(present, absent)` totals for one student across `dates`.
    pub fn totals(sheet: &AttendanceSheet, student_id: &str, dates: &[String]) -> (usize, usize) {
        dates
            .iter()
            .filter_map(|d| sheet.mark_of(student_id, d))
            .fold((0, 0), |(p, a), m| match m {
                Mark::Present => (p + 1, a),
                Mark::Absent => (p, a + 1),
            })
    }
}
