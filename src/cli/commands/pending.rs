use crate::cli::commands::{open_section, print_warnings, resolve_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{color_for_mark, paint};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Pending {
        batch,
        section,
        date: day,
    } = cmd
    else {
        return Ok(());
    };

    let day = resolve_date(day)?;
    let (store, section) = open_section(cfg, batch, section)?;

    let pending = AttendanceLogic::pending(&store, &section, &day, cfg.lookback_days)?;
    print_warnings(&section, &pending.warnings);

    if pending.total_students == 0 {
        info(format!("No students found in {section}."));
        return Ok(());
    }

    if pending.students.is_empty() {
        success(format!(
            "All {} students of {section} are marked for {}.",
            pending.total_students,
            date::to_display(&day)
        ));
        return Ok(());
    }

    header(format!(
        "{section} · {} · {} of {} unmarked",
        date::to_display(&day),
        pending.students.len(),
        pending.total_students
    ));

    let id_w = pending
        .students
        .iter()
        .map(|s| s.id.chars().count())
        .max()
        .unwrap_or(0);

    for student in &pending.students {
        let history: Vec<String> = student
            .history
            .iter()
            .map(|(d, m)| {
                let label = match m {
                    Some(mark) => mark.as_str(),
                    None => "Not Marked",
                };
                format!(
                    "{}: {}",
                    date::to_display(d),
                    paint(color_for_mark(*m), label)
                )
            })
            .collect();

        println!("{:<id_w$}  {}", student.id, history.join(" | "), id_w = id_w);
    }

    println!(
        "\nMark with: trackese mark \"{}\" \"{}\" <IDS>... --present|--absent --date {day}",
        section.batch_name, section.section
    );

    Ok(())
}
