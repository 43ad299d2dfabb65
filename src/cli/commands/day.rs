use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::policy::PolicySet;
use crate::core::week::day_reports;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_for_day;
use crate::errors::AppResult;
use crate::ui::messages::{error, header};
use crate::utils::date::parse_date_or_today;
use crate::utils::table::Table;
use crate::utils::time::format_hours;

/// Per-post day report: slot coverage, hours, and every diagnostic.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date } = cmd {
        let day = parse_date_or_today(date.as_ref())?;

        let mut pool = DbPool::new(&cfg.database)?;
        let events = load_events_for_day(&mut pool, &day)?;

        let policies = PolicySet::from_config(cfg);
        let reports = day_reports(day, &events, &policies);

        header(format!("Day report — {}", day.format("%A %d.%m.%Y")));

        let rows: Vec<Vec<String>> = reports
            .iter()
            .map(|r| {
                vec![
                    r.post_id.clone(),
                    format!(
                        "{} ({} h)",
                        r.morning.status.as_str(),
                        format_hours(r.morning.hours)
                    ),
                    format!(
                        "{} ({} h)",
                        r.afternoon.status.as_str(),
                        format_hours(r.afternoon.hours)
                    ),
                    format_hours(r.total_hours),
                ]
            })
            .collect();

        let table = Table::auto(&["post", "morning", "afternoon", "total"], rows);
        println!("{}", table.render());

        for report in &reports {
            for diag in &report.diagnostics {
                error(format!("{}: {}", report.post_id, diag));
            }
        }
    }
    Ok(())
}
