use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Default work session length in seconds.
pub const WORK_SECS: u64 = 25 * 60;
/// Default short break length in seconds.
pub const BREAK_SECS: u64 = 5 * 60;
/// Default long break length in seconds.
pub const LONG_BREAK_SECS: u64 = 15 * 60;
/// Every n-th completed pomodoro earns a long break.
pub const LONG_BREAK_INTERVAL: u32 = 4;
/// Upper bound for any countdown, keeps deadline arithmetic in range.
pub const MAX_COUNTDOWN_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Work,
    Break,
    LongBreak,
    Disabled,
}

impl Mode {
    /// Glyph shown in the status label and the menu.
    pub fn glyph(&self) -> &'static str {
        match self {
            Mode::Work => "👔",
            Mode::Break => "☕",
            Mode::LongBreak => "🌴",
            Mode::Disabled => "🍅",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::Break => "Break",
            Mode::LongBreak => "Long break",
            Mode::Disabled => "Disabled",
        }
    }

    /// Notification text announced when the mode is entered.
    /// Disabling is silent.
    pub fn announcement(&self) -> Option<&'static str> {
        match self {
            Mode::Work => Some("Work time!"),
            Mode::Break => Some("Break time!"),
            Mode::LongBreak => Some("Long break time!"),
            Mode::Disabled => None,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Mode::Disabled)
    }
}

/// Countdown length per active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub work_secs: u64,
    pub break_secs: u64,
    pub long_break_secs: u64,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work_secs: WORK_SECS,
            break_secs: BREAK_SECS,
            long_break_secs: LONG_BREAK_SECS,
        }
    }
}

impl Durations {
    /// Countdown length for `mode`, `None` for [`Mode::Disabled`].
    ///
    /// Values beyond [`MAX_COUNTDOWN_SECS`] saturate.
    pub fn for_mode(&self, mode: Mode) -> Option<Duration> {
        let secs = match mode {
            Mode::Work => self.work_secs,
            Mode::Break => self.break_secs,
            Mode::LongBreak => self.long_break_secs,
            Mode::Disabled => return None,
        };
        Some(Duration::seconds(secs.min(MAX_COUNTDOWN_SECS) as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations_match_classic_pomodoro() {
        let d = Durations::default();
        assert_eq!(d.for_mode(Mode::Work), Some(Duration::seconds(1500)));
        assert_eq!(d.for_mode(Mode::Break), Some(Duration::seconds(300)));
        assert_eq!(d.for_mode(Mode::LongBreak), Some(Duration::seconds(900)));
        assert_eq!(d.for_mode(Mode::Disabled), None);
    }

    #[test]
    fn oversized_durations_saturate() {
        let d = Durations {
            work_secs: u64::MAX,
            ..Durations::default()
        };
        assert_eq!(
            d.for_mode(Mode::Work),
            Some(Duration::seconds(MAX_COUNTDOWN_SECS as i64))
        );
    }

    #[test]
    fn only_disabled_is_silent() {
        assert_eq!(Mode::Work.announcement(), Some("Work time!"));
        assert_eq!(Mode::Break.announcement(), Some("Break time!"));
        assert_eq!(Mode::LongBreak.announcement(), Some("Long break time!"));
        assert_eq!(Mode::Disabled.announcement(), None);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Mode::LongBreak).unwrap(), "\"long_break\"");
        let parsed: Mode = serde_json::from_str("\"work\"").unwrap();
        assert_eq!(parsed, Mode::Work);
    }
}
