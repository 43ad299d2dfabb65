//! Per-post shift policy.
//! Window boundaries and hour totals live here, resolved once per post from
//! the configuration. Post kind is a config lookup, never a name check.

use crate::config::Config;
use crate::models::post::{Post, PostKind};
use chrono::NaiveTime;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Latest time of day a check-in still counts for the morning window.
pub fn morning_in_end() -> NaiveTime {
    hm(7, 0)
}

/// Latest time of day a check-out still counts as a morning shift.
pub fn morning_out_end() -> NaiveTime {
    hm(15, 0)
}

/// Earliest time of day a check-in counts for the afternoon window.
pub fn afternoon_in_start() -> NaiveTime {
    hm(13, 0)
}

/// A check-out at or after this time closes the afternoon (or double) window.
pub fn evening_start() -> NaiveTime {
    hm(21, 0)
}

/// A next-day check-out before this time may still close an overnight double.
pub fn early_morning_cutoff() -> NaiveTime {
    hm(2, 0)
}

/// Resolved policy for one post.
#[derive(Debug, Clone, Copy)]
pub struct ShiftPolicy {
    pub shift_hours: f64,
    pub double_hours: f64,
    pub swap_window_min: i64,
    /// Command posts may close a double shift after midnight.
    pub allow_overnight_double: bool,
}

/// Policy table for the whole roster, built once per request from config.
#[derive(Debug, Clone)]
pub struct PolicySet {
    regular: ShiftPolicy,
    command: ShiftPolicy,
    posts: Vec<Post>,
}

impl PolicySet {
    pub fn from_config(cfg: &Config) -> Self {
        let regular = ShiftPolicy {
            shift_hours: cfg.shift_hours,
            double_hours: cfg.double_shift_hours,
            swap_window_min: cfg.swap_window_min,
            allow_overnight_double: false,
        };
        let command = ShiftPolicy {
            shift_hours: cfg.shift_hours,
            double_hours: cfg.command_double_hours,
            swap_window_min: cfg.swap_window_min,
            allow_overnight_double: true,
        };
        Self {
            regular,
            command,
            posts: cfg.posts.clone(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn kind_of(&self, post_id: &str) -> PostKind {
        self.posts
            .iter()
            .find(|p| p.code == post_id)
            .map(|p| p.kind)
            .unwrap_or(PostKind::Regular)
    }

    /// Resolve the policy for a post. Unknown posts fall back to the
    /// regular profile so ad-hoc queries still classify.
    pub fn for_post(&self, post_id: &str) -> &ShiftPolicy {
        match self.kind_of(post_id) {
            PostKind::Regular => &self.regular,
            PostKind::Command => &self.command,
        }
    }
}
