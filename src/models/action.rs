use serde::Serialize;

/// Badge-scan direction: a guard either clocks in or clocks out.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Action {
    CheckIn,
    CheckOut,
}

impl Action {
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" | "checkin" | "check-in" => Some(Self::CheckIn),
            "out" | "checkout" | "check-out" => Some(Self::CheckOut),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Action::CheckIn => "in",
            Action::CheckOut => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(Action::CheckIn),
            "out" => Some(Action::CheckOut),
            _ => None,
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, Action::CheckIn)
    }

    pub fn is_check_out(&self) -> bool {
        matches!(self, Action::CheckOut)
    }
}
