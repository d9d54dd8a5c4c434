use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        LogLogic::print_log(cfg)?;
    }

    Ok(())
}
