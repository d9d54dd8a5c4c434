use crate::config::Config;
use crate::db::log::read_all;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const OP_WIDTH_MAX: usize = 40;

/// ANSI colour for an operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "mark" => Colour::Green,
        "students" => Colour::Cyan,
        "section_add" => Colour::Yellow,
        "section_remove" => Colour::Red,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let pool = DbPool::open(&cfg.database_path())?;
        let entries = read_all(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        // operation and target share one column, padded on the visible text
        let labels: Vec<String> = entries
            .iter()
            .map(|e| {
                let label = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                truncate(&label, OP_WIDTH_MAX)
            })
            .collect();

        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, label) in entries.iter().zip(labels) {
            let color = color_for_operation(&entry.operation);
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));

            let colored = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(label.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
