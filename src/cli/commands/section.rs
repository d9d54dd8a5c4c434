use crate::cli::parser::{Commands, SectionAction};
use crate::config::Config;
use crate::db::audit;
use crate::errors::{AppError, AppResult};
use crate::registry::SectionRegistry;
use crate::ui::messages::{info, success};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Section { action } = cmd else {
        return Ok(());
    };

    let mut registry = SectionRegistry::new(cfg.registry_path());

    match action {
        SectionAction::List => {
            let sections = registry.list_all()?;
            if sections.is_empty() {
                info("No sections registered. Add one with `trackese section add <BATCH> <SECTION>`.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                "Batch".to_string(),
                "Section".to_string(),
                "File".to_string(),
            ]);
            for s in sections {
                table.add_row(vec![
                    s.batch_name.clone(),
                    s.section.clone(),
                    s.file_name(),
                ]);
            }
            print!("{}", table.render());
        }

        SectionAction::Add { batch, section } => {
            let before = registry.list_all()?.len();
            let created = registry.add(batch, section)?;

            if registry.list_all()?.len() == before {
                info(format!("Section '{created}' is already registered."));
            } else {
                success(format!(
                    "Section '{created}' registered (file: {}).",
                    created.file_name()
                ));
                audit(cfg, "section_add", &created.full_name(), "Section registered");
            }
        }

        SectionAction::Remove { batch, section } => {
            let target = registry.resolve(batch, section)?;
            if !registry.remove(&target)? {
                return Err(AppError::SectionNotFound(target.full_name()));
            }
            success(format!(
                "Section '{target}' removed. Attendance file {} was kept.",
                target.file_name()
            ));
            audit(cfg, "section_remove", &target.full_name(), "Section removed");
        }
    }

    Ok(())
}
