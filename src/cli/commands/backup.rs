use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::BackupLogic;
use crate::db::audit;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, force } = cmd {
        let count = BackupLogic::backup(cfg, file, *force)?;
        success(format!("Backup created: {file} ({count} file(s))"));
        audit(cfg, "backup", file, &format!("Archived {count} file(s)"));
    }

    Ok(())
}
