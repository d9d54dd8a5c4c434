use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::registry::SectionRegistry;
use std::fs;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the home and data directories (if missing)
///  - the configuration file (skipped in test mode)
///  - the audit log database
///  - the section registry, seeded with the default sections
pub fn handle(cli: &Cli, cfg: &Config, home: &Path) -> AppResult<()> {
    println!("⚙️  Initializing trackese…");

    fs::create_dir_all(home)?;
    fs::create_dir_all(cfg.data_dir_path())?;

    if !cli.test {
        let path = cfg.save(home)?;
        println!("📄 Config file : {}", path.display());
    }
    println!("📁 Data dir    : {}", cfg.data_dir_path().display());

    let mut registry = SectionRegistry::new(cfg.registry_path());
    let count = registry.list_all()?.len();
    println!(
        "📚 Sections    : {} ({} registered)",
        registry.path().display(),
        count
    );

    let pool = DbPool::open(&cfg.database_path())?;
    println!("🗄️  Audit log   : {}", cfg.database_path().display());

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "",
        &format!("Initialized at {}", home.display()),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 trackese initialization completed!");
    Ok(())
}
