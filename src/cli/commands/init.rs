use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Create the configuration file (unless running in test mode) and the
/// database schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::load();

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    if cli.test {
        info("Test mode: configuration file not written.");
    } else {
        cfg.save()?;
        info(format!(
            "Configuration written to {}",
            Config::config_file().display()
        ));
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
