use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::record_operation;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::event::AttendanceEvent;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::parse_time_arg;

/// Record one badge event. This is also the supervisor's tool to fix a
/// missing check-in/check-out surfaced by the day report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        post,
        employee,
        action,
        time,
        invalid,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Resolve the post against the roster; unknown codes are allowed
        //    but called out, so a typo does not silently create a new post.
        //
        if !cfg.posts.iter().any(|p| p.code == *post) {
            warning(format!(
                "Post '{post}' is not in the configured roster; recording anyway."
            ));
        }

        //
        // 3. Parse action and time
        //
        let act = Action::from_str_loose(action)
            .ok_or_else(|| AppError::InvalidAction(action.to_string()))?;
        let t = parse_time_arg(time)?;

        //
        // 4. Open DB and insert
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let event = AttendanceEvent::new(
            0,
            employee.clone(),
            post.clone(),
            act,
            d,
            t,
            !*invalid,
        );
        insert_event(&mut pool, &event)?;

        record_operation(
            &pool.conn,
            "add",
            post,
            &format!("{} {} {} {}", employee, act.to_db_str(), date, time),
        )?;

        success(format!(
            "Recorded {} {} on {} at {} ({})",
            employee,
            act.to_db_str(),
            post,
            time,
            date
        ));
    }
    Ok(())
}
