use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Inspect the configuration: print it or check it for mistakes.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("serialize: {e}")))?;
            println!("{yaml}");
        }

        if *check {
            let issues = cfg.check();
            if issues.is_empty() {
                success("Configuration OK.");
            } else {
                for issue in issues {
                    warning(issue);
                }
            }
        }
    }
    Ok(())
}
