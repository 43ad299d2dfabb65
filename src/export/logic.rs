// src/export/logic.rs

use crate::config::Config;
use crate::core::policy::PolicySet;
use crate::core::week::{build_week_matrix, monday_of, week_dates};
use crate::db::pool::DbPool;
use crate::db::queries::load_events_between;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DayDetailRow, EventExport, day_detail_rows};
use crate::export::xlsx::export_xlsx;
use crate::models::event::AttendanceEvent;
use crate::ui::messages::warning;
use chrono::{Days, NaiveDate};
use std::io::{self, Write};
use std::path::Path;

/// High-level export logic: load one week of events, run the aggregation
/// pipeline, and hand the result structures to the chosen writer.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the week containing `reference`.
    ///
    /// - `xlsx` writes the full report workbook (weekly matrix, per-day
    ///   detail, raw events);
    /// - `csv` / `json` dump the raw events of the week.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        reference: NaiveDate,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        confirm_overwrite(path, force)?;

        let events = Self::load_week(pool, reference)?;
        let raw: Vec<EventExport> = events.iter().map(EventExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&raw, path),
            ExportFormat::Json => export_json(&raw, path),
            ExportFormat::Xlsx => {
                let policies = PolicySet::from_config(cfg);
                let matrix = build_week_matrix(reference, &events, &policies);

                let mut details: Vec<DayDetailRow> = Vec::new();
                for date in week_dates(reference) {
                    for report in crate::core::week::day_reports(date, &events, &policies) {
                        details.extend(day_detail_rows(&report));
                    }
                }

                export_xlsx(&matrix, &details, &raw, path)
            }
        }
    }

    /// Load the events of the week containing the reference date. The raw
    /// query spans one extra day so check-outs scanned after Sunday midnight
    /// are found, then everything is narrowed to the week by business day.
    pub fn load_week(pool: &mut DbPool, reference: NaiveDate) -> AppResult<Vec<AttendanceEvent>> {
        let monday = monday_of(reference);
        let end = monday
            .checked_add_days(Days::new(8))
            .ok_or_else(|| AppError::Other("date out of range".to_string()))?;
        let next_monday = monday.checked_add_days(Days::new(7)).unwrap_or(end);

        let events = load_events_between(pool, &monday, &end)?;
        Ok(events
            .into_iter()
            .filter(|ev| {
                let day = crate::core::pairs::business_date(ev);
                day >= monday && day < next_monday
            })
            .collect())
    }
}

/// An existing report file is only replaced with `--force` or an explicit
/// yes at the prompt.
fn confirm_overwrite(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("'{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::Export(
            "export cancelled, existing file kept".to_string(),
        )),
    }
}
