use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::event::AttendanceEvent;
use chrono::{Days, NaiveDate};
use rusqlite::{Result, Row, params};

/// All events with date in `[start, end)`, ordered chronologically.
/// This is the single query the engine is fed from; everything downstream
/// is pure in-memory transformation.
pub fn load_events_between(
    pool: &mut DbPool,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<AttendanceEvent>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM attendance
         WHERE date >= ?1 AND date < ?2
         ORDER BY date ASC, time ASC, id ASC",
    )?;

    let start_str = start.format("%Y-%m-%d").to_string();
    let end_str = end.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map(params![start_str, end_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Events feeding one day's report: the day itself plus the following
/// calendar day, so overnight check-outs scanned after midnight are in
/// scope. Business-day attribution downstream pulls them back.
pub fn load_events_for_day(pool: &mut DbPool, day: &NaiveDate) -> AppResult<Vec<AttendanceEvent>> {
    let end = day.checked_add_days(Days::new(2)).unwrap_or(*day);
    load_events_between(pool, day, &end)
}

/// Insert one badge event (supervisor correction or seed data).
pub fn insert_event(pool: &mut DbPool, event: &AttendanceEvent) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO attendance (date, time, employee, post, action, valid, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            event.date_str(),
            event.time_str(),
            event.employee_id,
            event.post_id,
            event.action.to_db_str(),
            event.valid as i32,
            event.source,
            event.created_at,
        ],
    )?;
    Ok(())
}

pub fn map_row(row: &Row) -> Result<AttendanceEvent> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = chrono::NaiveTime::parse_from_str(&time_str, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let action_str: String = row.get("action")?;
    let action = Action::from_db_str(&action_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidAction(action_str.clone())),
        )
    })?;

    let valid: i32 = row.get("valid")?;

    Ok(AttendanceEvent {
        id: row.get("id")?,
        employee_id: row.get("employee")?,
        post_id: row.get("post")?,
        action,
        date,
        time,
        valid: valid != 0,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}
