use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Every state change of the engine produces an Event.
/// Hosts log them or print them; the engine itself never reads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A countdown started, either by a command or by expiry of the
    /// previous one (`automatic`).
    ModeChanged {
        from: Mode,
        to: Mode,
        automatic: bool,
        /// Completed pomodoros after this change.
        completed_count: u64,
        deadline: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    Disabled {
        from: Mode,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        remaining_secs: i64,
        completed_count: u64,
        ticker_active: bool,
        label: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::ModeChanged { at, .. }
            | Event::Disabled { at, .. }
            | Event::StateSnapshot { at, .. } => *at,
        }
    }
}
