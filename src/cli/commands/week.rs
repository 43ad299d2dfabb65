use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::policy::PolicySet;
use crate::core::week::build_week_matrix;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::report::WeekCell;
use crate::ui::messages::header;
use crate::utils::date::parse_date_or_today;
use crate::utils::table::Table;
use crate::utils::time::format_hours;
use chrono::Days;

/// Weekly hour matrix: one row per post, one column per day, plus totals.
/// Days without any scan show `--`, never a zero.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date } = cmd {
        let reference = parse_date_or_today(date.as_ref())?;

        let mut pool = DbPool::new(&cfg.database)?;
        let events = ExportLogic::load_week(&mut pool, reference)?;

        let policies = PolicySet::from_config(cfg);
        let matrix = build_week_matrix(reference, &events, &policies);

        let sunday = matrix
            .monday
            .checked_add_days(Days::new(6))
            .unwrap_or(matrix.monday);
        header(format!(
            "Week report ({} – {})",
            matrix.monday.format("%d.%m.%Y"),
            sunday.format("%d.%m.%Y")
        ));

        let mut headers: Vec<String> = vec!["post".to_string()];
        for d in &matrix.dates {
            headers.push(d.format("%a %d.%m").to_string());
        }
        headers.push("total".to_string());
        let header_refs: Vec<&str> = headers.iter().map(|h| h.as_str()).collect();

        let rows: Vec<Vec<String>> = matrix
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![row.post_id.clone()];
                for c in &row.cells {
                    cells.push(match c {
                        WeekCell::Hours(h) => format_hours(*h),
                        WeekCell::NoCoverage => "--".to_string(),
                    });
                }
                cells.push(format_hours(row.weekly_total));
                cells
            })
            .collect();

        let table = Table::auto(&header_refs, rows);
        println!("{}", table.render());
    }
    Ok(())
}
