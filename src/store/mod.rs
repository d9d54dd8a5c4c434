//! Per-section attendance files.
//!
//! Every mutation is a full read-modify-write of the section's CSV file.
//! Within one process the cycle is serialized by a lock per section;
//! different sections never contend.

pub mod csv_io;
pub mod ids;

use crate::errors::{AppError, AppResult, ParseWarning};
use crate::models::{AttendanceSheet, Mark, Section};
use crate::utils::date;
use crate::utils::fs_utils::write_atomic;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Upper bound on the ids one `add_range`/`add_id_list` call may generate.
pub const MAX_IDS_PER_CALL: u64 = 10_000;

/// A section file as read from disk, with the rows that had to be repaired.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub sheet: AttendanceSheet,
    pub warnings: Vec<ParseWarning>,
}

/// Outcome of a mutation: what changed plus any warnings from the load.
#[derive(Debug, Clone, Default)]
pub struct Updated {
    /// Student ids appended to the sheet by this call.
    pub added: Vec<String>,
    pub warnings: Vec<ParseWarning>,
}

pub struct AttendanceStore {
    data_dir: PathBuf,
    locks: Mutex<HashMap<Section, Arc<Mutex<()>>>>,
}

impl AttendanceStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn path_for(&self, section: &Section) -> PathBuf {
        self.data_dir.join(section.file_name())
    }

    fn lock_for(&self, section: &Section) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock();
        locks
            .entry(section.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Read a section. A missing file is an empty sheet, not an error.
    pub fn load(&self, section: &Section) -> AppResult<Loaded> {
        let path = self.path_for(section);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Loaded::default()),
            Err(e) => return Err(e.into()),
        };

        let (sheet, warnings) = csv_io::read_sheet(file)?;
        Ok(Loaded { sheet, warnings })
    }

    /// Overwrite a section file with `sheet`, keeping its row and column order.
    pub fn save(&self, section: &Section, sheet: &AttendanceSheet) -> AppResult<()> {
        let lock = self.lock_for(section);
        let _guard = lock.lock();
        self.write(section, sheet)
    }

    fn write(&self, section: &Section, sheet: &AttendanceSheet) -> AppResult<()> {
        let bytes = csv_io::write_sheet(sheet)?;
        write_atomic(&self.path_for(section), &bytes)
    }

    /// Load, let `f` edit the sheet, save. The section stays locked throughout.
    fn modify<F>(&self, section: &Section, f: F) -> AppResult<Updated>
    where
        F: FnOnce(&mut AttendanceSheet) -> Vec<String>,
    {
        let lock = self.lock_for(section);
        let _guard = lock.lock();

        let Loaded {
            mut sheet,
            warnings,
        } = self.load(section)?;
        let added = f(&mut sheet);
        self.write(section, &sheet)?;

        Ok(Updated { added, warnings })
    }

    /// Record one mark, adding the date column and the student as needed.
    pub fn upsert_mark(
        &self,
        section: &Section,
        date: &str,
        student_id: &str,
        is_present: bool,
    ) -> AppResult<Updated> {
        self.apply_marks(
            section,
            &[(date.to_string(), student_id.to_string(), Mark::from_present(is_present))],
        )
    }

    /// Record many `(date, student, mark)` cells in one load/save cycle.
    ///
    /// Every date must be canonical `YYYY-MM-DD`; otherwise nothing is touched.
    pub fn apply_marks(
        &self,
        section: &Section,
        marks: &[(String, String, Mark)],
    ) -> AppResult<Updated> {
        if let Some((bad, _, _)) = marks
            .iter()
            .find(|(d, _, _)| date::parse_canonical(d).is_none())
        {
            return Err(AppError::InvalidDate(bad.clone()));
        }

        self.modify(section, |sheet| {
            let mut added = Vec::new();
            for (date, student_id, mark) in marks {
                if !sheet.contains_student(student_id) {
                    added.push(student_id.clone());
                }
                sheet.set_mark(date, student_id, *mark);
            }
            added
        })
    }

    /// Append every integer id in `[start_id, end_id]` that is not present yet.
    ///
    /// Both bounds must be integers; otherwise nothing is touched.
    pub fn add_range(&self, section: &Section, start_id: &str, end_id: &str) -> AppResult<Updated> {
        let start = ids::parse_id(start_id)?;
        let end = ids::parse_id(end_id)?;
        self.add_ranges(section, &[(start, end)])
    }

    /// Add students from a list such as `"1-5, 8, 10-12"`.
    ///
    /// The whole list is validated before the file is read.
    pub fn add_id_list(&self, section: &Section, text: &str) -> AppResult<Updated> {
        let ranges = ids::parse_id_list(text)?;
        self.add_ranges(section, &ranges)
    }

    fn add_ranges(&self, section: &Section, ranges: &[(i64, i64)]) -> AppResult<Updated> {
        let total = ranges
            .iter()
            .fold(0u64, |acc, &(start, end)| acc.saturating_add(range_len(start, end)));
        if total > MAX_IDS_PER_CALL {
            return Err(AppError::InvalidRange(format!(
                "{total} ids requested, at most {MAX_IDS_PER_CALL} per call"
            )));
        }

        self.modify(section, |sheet| {
            let mut added = Vec::new();
            for &(start, end) in ranges {
                for n in start..=end {
                    let id = n.to_string();
                    if sheet.add_student(&id) {
                        added.push(id);
                    }
                }
            }
            added
        })
    }
}

/// Number of ids in `[start, end]`, saturating; `start > end` is empty.
fn range_len(start: i64, end: i64) -> u64 {
    if start > end {
        return 0;
    }
    end.abs_diff(start).saturating_add(1)
}
