//! Console feedback for the supervisor: colored one-liners plus the
//! underlined section header used by the report views.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const FG_BLUE: &str = "\x1b[34m";

enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(&self) -> &'static str {
        match self {
            Tone::Info => FG_BLUE,
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

fn emit<T: fmt::Display>(tone: Tone, msg: T) {
    let line = format!("{}{}{} {}{}", tone.color(), BOLD, tone.icon(), RESET, msg);
    // Diagnostics go to stderr so they never pollute piped report output.
    match tone {
        Tone::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Tone::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Tone::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Tone::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Tone::Error, msg);
}

/// Title line above the day and week tables.
pub fn header<T: fmt::Display>(msg: T) {
    let title = msg.to_string();
    let rule = "=".repeat(title.chars().count().max(8));
    println!("{FG_BLUE}{BOLD}{title}{RESET}");
    println!("{FG_BLUE}{rule}{RESET}");
}
