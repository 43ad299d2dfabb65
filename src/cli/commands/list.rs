use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use crate::utils::table::Table;
use chrono::{Days, NaiveDate};

/// List raw badge events, optionally restricted to a period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { range } = cmd {
        let (start, last) = match range {
            Some(r) => parse_range(r)?,
            None => (
                NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(9999, 12, 31).unwrap(),
            ),
        };
        // load_events_between is half-open on the end date
        let end = last.checked_add_days(Days::new(1)).unwrap_or(last);

        let mut pool = DbPool::new(&cfg.database)?;
        let events = load_events_between(&mut pool, &start, &end)?;

        if events.is_empty() {
            warning("No events found for the selected period.");
            return Ok(());
        }

        let rows: Vec<Vec<String>> = events
            .iter()
            .map(|ev| {
                vec![
                    ev.id.to_string(),
                    ev.date_str(),
                    ev.time_str(),
                    ev.employee_id.clone(),
                    ev.post_id.clone(),
                    ev.action.to_db_str().to_string(),
                    (if ev.valid { "yes" } else { "no" }).to_string(),
                    ev.source.clone(),
                ]
            })
            .collect();

        let table = Table::auto(
            &["id", "date", "time", "employee", "post", "action", "valid", "source"],
            rows,
        );
        println!("{}", table.render());
    }
    Ok(())
}
