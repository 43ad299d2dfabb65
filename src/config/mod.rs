use crate::errors::{AppError, AppResult};
use crate::models::post::{Post, PostKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_posts")]
    pub posts: Vec<Post>,
    #[serde(default = "default_shift_hours")]
    pub shift_hours: f64,
    #[serde(default = "default_double_shift_hours")]
    pub double_shift_hours: f64,
    #[serde(default = "default_command_double_hours")]
    pub command_double_hours: f64,
    #[serde(default = "default_swap_window_min")]
    pub swap_window_min: i64,
}

fn default_shift_hours() -> f64 {
    7.5
}
fn default_double_shift_hours() -> f64 {
    15.25
}
fn default_command_double_hours() -> f64 {
    16.25
}
fn default_swap_window_min() -> i64 {
    30
}

/// Default duty-post roster. The command post is the only one with the
/// longer double-shift total and overnight allowance.
fn default_posts() -> Vec<Post> {
    vec![
        Post::new("Command", PostKind::Command),
        Post::new("CCTV", PostKind::Regular),
        Post::new("Gate", PostKind::Regular),
        Post::new("Warehouse2", PostKind::Regular),
        Post::new("Warehouse3", PostKind::Regular),
        Post::new("Turnstile2", PostKind::Regular),
        Post::new("Turnstile3", PostKind::Regular),
        Post::new("Sealer2", PostKind::Regular),
        Post::new("Sealer3", PostKind::Regular),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            posts: default_posts(),
            shift_hours: default_shift_hours(),
            double_shift_hours: default_double_shift_hours(),
            command_double_hours: default_command_double_hours(),
            swap_window_min: default_swap_window_min(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".postwatch")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("postwatch.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("postwatch.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Persist the configuration as YAML, creating the directory if needed.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("serialize: {e}")))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Check the roster and policy numbers for obvious mistakes.
    pub fn check(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.posts.is_empty() {
            issues.push("post roster is empty".to_string());
        }
        if self.shift_hours <= 0.0 {
            issues.push("shift_hours must be positive".to_string());
        }
        if self.double_shift_hours < self.shift_hours {
            issues.push("double_shift_hours is below shift_hours".to_string());
        }
        if self.command_double_hours < self.double_shift_hours {
            issues.push("command_double_hours is below double_shift_hours".to_string());
        }
        if self.swap_window_min < 0 {
            issues.push("swap_window_min must not be negative".to_string());
        }
        issues
    }
}
