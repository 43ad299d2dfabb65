use serde::{Deserialize, Serialize};

/// Duty-post category. Command posts carry a longer double-shift total and
/// may span midnight; the distinction is configuration, not a name check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Regular,
    Command,
}

/// One entry of the configured post roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub code: String,
    pub kind: PostKind,
}

impl Post {
    pub fn new(code: &str, kind: PostKind) -> Self {
        Self {
            code: code.to_string(),
            kind,
        }
    }
}
