pub mod backup;
pub mod config;
pub mod dates;
pub mod init;
pub mod log;
pub mod mark;
pub mod pending;
pub mod section;
pub mod show;
pub mod students;

use crate::config::Config;
use crate::errors::{AppError, AppResult, ParseWarning};
use crate::models::Section;
use crate::registry::SectionRegistry;
use crate::store::AttendanceStore;
use crate::ui::messages::warning;
use crate::utils::date;

/// Resolve a registered section and open the store holding its file.
pub(crate) fn open_section(
    cfg: &Config,
    batch: &str,
    section: &str,
) -> AppResult<(AttendanceStore, Section)> {
    let mut registry = SectionRegistry::new(cfg.registry_path());
    let section = registry.resolve(batch, section)?;
    Ok((AttendanceStore::new(cfg.data_dir_path()), section))
}

/// A date given on the command line, or today.
pub(crate) fn resolve_date(date: &Option<String>) -> AppResult<String> {
    match date {
        Some(d) => date::parse_canonical(d)
            .map(|_| d.clone())
            .ok_or_else(|| AppError::InvalidDate(d.clone())),
        None => Ok(date::today()),
    }
}

pub(crate) fn print_warnings(section: &Section, warnings: &[ParseWarning]) {
    for w in warnings {
        warning(format!("{}: {}", section.file_name(), w));
    }
}
