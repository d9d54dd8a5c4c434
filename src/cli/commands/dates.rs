use crate::cli::commands::resolve_date;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::utils::date;

/// Print the current month's dates, or the `--last N` days before `--from`.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    let Commands::Dates { last, from } = cmd else {
        return Ok(());
    };

    let dates = match last {
        Some(n) => date::trailing_days(&resolve_date(from)?, *n),
        None => date::month_dates(),
    };

    let today = date::today();
    for d in dates {
        let marker = if d == today { "  ← today" } else { "" };
        println!("{d}  {}{marker}", date::to_display(&d));
    }

    Ok(())
}
