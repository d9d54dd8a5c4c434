use crate::cli::commands::{open_section, print_warnings, resolve_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceLogic;
use crate::db::audit;
use crate::errors::AppResult;
use crate::models::Mark;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Mark {
        batch,
        section,
        students,
        present,
        absent: _,
        date: day,
        remaining,
    } = cmd
    else {
        return Ok(());
    };

    let day = resolve_date(day)?;
    let mark = Mark::from_present(*present);
    let (store, section) = open_section(cfg, batch, section)?;

    let marks = {
        let loaded = store.load(&section)?;
        AttendanceLogic::collect_marks(&loaded.sheet, &day, students, *remaining, mark)?
    };

    if marks.is_empty() {
        info(format!(
            "Every student of {section} is already marked for {}.",
            date::to_display(&day)
        ));
        return Ok(());
    }

    let updated = store.apply_marks(&section, &marks)?;
    print_warnings(&section, &updated.warnings);

    for id in &updated.added {
        warning(format!("Student '{id}' was not in {section} and has been added."));
    }

    success(format!(
        "{} student(s) marked {} on {} in {section}.",
        marks.len(),
        mark.as_str(),
        date::to_display(&day)
    ));

    let ids: Vec<&str> = marks.iter().map(|(_, id, _)| id.as_str()).collect();
    audit(
        cfg,
        "mark",
        &section.full_name(),
        &format!("{day} {}: {}", mark.as_str(), ids.join(" ")),
    );

    Ok(())
}
