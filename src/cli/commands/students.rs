use crate::cli::commands::{open_section, print_warnings};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::audit;
use crate::errors::{AppError, AppResult};
use crate::store::ids::parse_id;
use crate::ui::messages::{header, info, success};

/// Add students (range and/or list), then print the section's students.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Students {
        batch,
        section,
        range,
        add,
    } = cmd
    else {
        return Ok(());
    };

    let (store, section) = open_section(cfg, batch, section)?;

    if let Some(bounds) = range {
        let [start, end] = bounds.as_slice() else {
            return Err(AppError::InvalidRange(
                "--range needs a start and an end id".to_string(),
            ));
        };

        if parse_id(start)? > parse_id(end)? {
            return Err(AppError::InvalidRange(format!(
                "start id {start} must be less than or equal to end id {end}"
            )));
        }

        let updated = store.add_range(&section, start, end)?;
        print_warnings(&section, &updated.warnings);
        report_added(cfg, &section.full_name(), &updated.added);
    }

    if let Some(list) = add {
        let updated = store.add_id_list(&section, list)?;
        print_warnings(&section, &updated.warnings);
        report_added(cfg, &section.full_name(), &updated.added);
    }

    let loaded = store.load(&section)?;
    if range.is_none() && add.is_none() {
        print_warnings(&section, &loaded.warnings);
    }

    header(format!("Students of {section}"));
    if loaded.sheet.students.is_empty() {
        info("No students yet. Add some with --range START END or --add \"1-5, 8\".");
        return Ok(());
    }

    for id in loaded.sheet.student_ids() {
        println!("{id}");
    }
    println!("\nTotal: {}", loaded.sheet.students.len());

    Ok(())
}

fn report_added(cfg: &Config, target: &str, added: &[String]) {
    if added.is_empty() {
        info("No new student ids: all of them were already present.");
        return;
    }

    success(format!("{} student id(s) added.", added.len()));
    audit(
        cfg,
        "students",
        target,
        &format!("Added {} student(s): {}", added.len(), summarize(added)),
    );
}

fn summarize(ids: &[String]) -> String {
    match ids {
        [] => String::new(),
        [one] => one.clone(),
        [first, .., last] => format!("{first}..{last}"),
    }
}
