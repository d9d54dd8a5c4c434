use crate::cli::commands::{open_section, print_warnings, resolve_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceLogic;
use crate::errors::AppResult;
use crate::models::Mark;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_rate, colorize_mark, paint};
use crate::utils::date;
use crate::utils::table::Table;

/// Print the attendance history of a section as a table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Show {
        batch,
        section,
        date: day,
    } = cmd
    else {
        return Ok(());
    };

    let day = match day {
        Some(_) => Some(resolve_date(day)?),
        None => None,
    };
    let (store, section) = open_section(cfg, batch, section)?;

    let loaded = store.load(&section)?;
    print_warnings(&section, &loaded.warnings);
    let sheet = &loaded.sheet;

    if sheet.students.is_empty() {
        info(format!("No students found in {section}."));
        return Ok(());
    }

    let dates = AttendanceLogic::history_columns(sheet, day.as_deref());

    let mut headers = Vec::with_capacity(dates.len() + 3);
    headers.push("Student ID".to_string());
    headers.extend(dates.iter().map(|d| date::to_display(d)));
    headers.push("P".to_string());
    headers.push("A".to_string());
    let totals_from = dates.len() + 1;

    let mut table = Table::new(headers);
    let mut rates = Vec::with_capacity(sheet.students.len());

    for student in &sheet.students {
        let mut row = Vec::with_capacity(dates.len() + 3);
        row.push(student.id.clone());
        row.extend(
            dates
                .iter()
                .map(|d| Mark::cell(student.mark_on(d)).to_string()),
        );

        let (present, absent) = AttendanceLogic::totals(sheet, &student.id, &dates);
        row.push(present.to_string());
        row.push(absent.to_string());
        rates.push(color_for_rate(present, present + absent));

        table.add_row(row);
    }

    header(format!("Attendance history · {section}"));

    let rendered = table.render_with(|row, col, cell, padded| {
        if col == 0 || col > totals_from {
            padded
        } else if col == totals_from {
            paint(rates[row], &padded)
        } else {
            colorize_mark(cell, padded)
        }
    });
    print!("{rendered}");

    Ok(())
}
