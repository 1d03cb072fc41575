mod engine;
mod format;
mod mode;

pub use engine::{EngineSettings, PomodoroEngine, APP_NAME};
pub use format::{format_remaining, status_label};
pub use mode::{
    Durations, Mode, BREAK_SECS, LONG_BREAK_INTERVAL, LONG_BREAK_SECS, MAX_COUNTDOWN_SECS,
    WORK_SECS,
};
