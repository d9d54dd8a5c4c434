//! Reading and writing the per-section CSV layout.
//!
//! ```text
//! Student ID,2024-03-01,2024-03-04
//! 101,Present,Absent
//! 102,,Present
//! ```
//!
//! Fields are split on a bare comma; quotes carry no meaning, so a value
//! containing a comma cannot be represented and is refused on write.

use crate::errors::{AppError, AppResult, ParseWarning};
use crate::models::{AttendanceSheet, Mark, Student};
use crate::utils::date;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use std::collections::HashSet;
use std::io::Read;

pub const HEADER_ID: &str = "Student ID";

/// Parse a whole section file.
pub fn read_sheet<R: Read>(rdr: R) -> AppResult<(AttendanceSheet, Vec<ParseWarning>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(rdr);

    let mut sheet = AttendanceSheet::new();
    let mut warnings = Vec::new();

    let mut records = reader.records();

    // Column index (after the id column) → date, `None` for ignored columns.
    let columns: Vec<Option<String>> = match records.next() {
        Some(header) => parse_header(&header?, &mut sheet, &mut warnings),
        None => return Ok((sheet, warnings)),
    };

    let mut seen_ids: HashSet<String> = HashSet::new();

    for record in records {
        let record = record?;
        let line = line_of(&record);

        if record.iter().all(|f| f.trim().is_empty()) && record.len() <= 1 {
            continue;
        }

        let id = record.get(0).unwrap_or("").trim();
        if id.is_empty() {
            warnings.push(ParseWarning::new(line, "row without a student id skipped"));
            continue;
        }
        if !seen_ids.insert(id.to_string()) {
            warnings.push(ParseWarning::new(
                line,
                format!("duplicate student id '{id}' skipped"),
            ));
            continue;
        }

        let values = record.len() - 1;
        if values > columns.len() {
            warnings.push(ParseWarning::new(
                line,
                format!(
                    "student '{id}' has {values} values for {} dates, extra values dropped",
                    columns.len()
                ),
            ));
        }

        let mut student = Student::new(id);
        for (cell, column) in record.iter().skip(1).zip(columns.iter()) {
            let Some(col_date) = column else { continue };
            if cell.trim().is_empty() {
                continue;
            }
            match Mark::from_cell(cell) {
                Some(mark) => student.set_mark(col_date, mark),
                None => warnings.push(ParseWarning::new(
                    line,
                    format!("unrecognised value '{cell}' for student '{id}' on {col_date}, left unmarked"),
                )),
            }
        }

        sheet.students.push(student);
    }

    Ok((sheet, warnings))
}

fn parse_header(
    header: &StringRecord,
    sheet: &mut AttendanceSheet,
    warnings: &mut Vec<ParseWarning>,
) -> Vec<Option<String>> {
    let line = line_of(header);
    let mut columns = Vec::with_capacity(header.len().saturating_sub(1));

    for raw in header.iter().skip(1) {
        let d = raw.trim();
        if sheet.has_date(d) {
            warnings.push(ParseWarning::new(
                line,
                format!("duplicate date column '{d}' ignored"),
            ));
            columns.push(None);
            continue;
        }
        if date::parse_canonical(d).is_none() {
            warnings.push(ParseWarning::new(
                line,
                format!("date column '{d}' is not in YYYY-MM-DD form"),
            ));
        }
        sheet.dates.push(d.to_string());
        columns.push(Some(d.to_string()));
    }

    columns
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Render a sheet in the exact order of its dates and students.
pub fn write_sheet(sheet: &AttendanceSheet) -> AppResult<Vec<u8>> {
    for d in &sheet.dates {
        check_field(d)?;
    }
    for s in &sheet.students {
        check_field(&s.id)?;
        if s.id.trim().is_empty() {
            return Err(AppError::InvalidStudentId("empty id".to_string()));
        }
    }

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    let mut header = Vec::with_capacity(sheet.dates.len() + 1);
    header.push(HEADER_ID);
    header.extend(sheet.dates.iter().map(String::as_str));
    wtr.write_record(&header)?;

    for student in &sheet.students {
        let mut row = Vec::with_capacity(sheet.dates.len() + 1);
        row.push(student.id.as_str());
        row.extend(sheet.dates.iter().map(|d| Mark::cell(student.mark_on(d))));
        wtr.write_record(&row)?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Io(std::io::Error::other(e.to_string())))
}

/// Values the reader would split or trim cannot be written back unchanged.
fn check_field(value: &str) -> AppResult<()> {
    if value.contains([',', '\n', '\r']) || value != value.trim() {
        return Err(AppError::InvalidField(value.to_string()));
    }
    Ok(())
}
