//! Pomodoro engine implementation.
//!
//! The engine is a deadline-based state machine. It does not own a thread
//! or a timer - the host is responsible for calling `on_tick()` roughly
//! once per second while [`PomodoroEngine::ticker_active`] is true.
//!
//! ## State Transitions
//!
//! ```text
//! Disabled --start_work--> Work
//! Work --expiry--> Break | LongBreak   (every 4th completed pomodoro)
//! Break | LongBreak --expiry--> Work
//! any --disable--> Disabled
//! any --start_*--> that mode           (completed count untouched)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = PomodoroEngine::new(display, notifier);
//! engine.start_work();
//! // Once per second, while engine.ticker_active():
//! engine.on_tick(); // Returns Some(Event) when a countdown expired
//! ```
//!
//! All calls must be serialized by the host; the engine does no locking.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::format::status_label;
use super::mode::{Durations, Mode, LONG_BREAK_INTERVAL};
use crate::events::Event;
use crate::menu::MenuAction;
use crate::ports::{Clock, Notifier, StatusDisplay, SystemClock};
use crate::storage::Config;

/// Title used for every notification.
pub const APP_NAME: &str = "Robomodoro";

/// Tunables that do not change while the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub durations: Durations,
    /// Every n-th completed pomodoro earns a long break. Values below 1
    /// are treated as 1.
    pub long_break_interval: u32,
    pub show_seconds: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            durations: Durations::default(),
            long_break_interval: LONG_BREAK_INTERVAL,
            show_seconds: false,
        }
    }
}

/// Core pomodoro engine.
///
/// One instance lives for the whole process. Commands and ticks mutate it;
/// the status label and notifications go out through the ports it owns.
pub struct PomodoroEngine {
    mode: Mode,
    /// Absolute end of the current countdown. Meaningless while disabled.
    deadline: DateTime<Utc>,
    /// Work sessions that ran out on their own since launch.
    completed_count: u64,
    /// Whether the host should keep delivering ticks.
    ticker_active: bool,
    settings: EngineSettings,
    display: Box<dyn StatusDisplay>,
    notifier: Box<dyn Notifier>,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for PomodoroEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PomodoroEngine")
            .field("mode", &self.mode)
            .field("deadline", &self.deadline)
            .field("completed_count", &self.completed_count)
            .field("ticker_active", &self.ticker_active)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl PomodoroEngine {
    /// Create a disabled engine using the system clock and default settings.
    pub fn new(display: impl StatusDisplay + 'static, notifier: impl Notifier + 'static) -> Self {
        Self::with_clock(display, notifier, SystemClock)
    }

    pub fn with_clock(
        display: impl StatusDisplay + 'static,
        notifier: impl Notifier + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        let deadline = clock.now();
        Self {
            mode: Mode::Disabled,
            deadline,
            completed_count: 0,
            ticker_active: false,
            settings: EngineSettings::default(),
            display: Box::new(display),
            notifier: Box::new(notifier),
            clock: Box::new(clock),
        }
    }

    /// Create a disabled engine tuned by the user's configuration.
    pub fn with_config(
        config: &Config,
        display: impl StatusDisplay + 'static,
        notifier: impl Notifier + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self::with_clock(display, notifier, clock).with_settings(config.engine_settings())
    }

    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    pub fn completed_count(&self) -> u64 {
        self.completed_count
    }

    pub fn ticker_active(&self) -> bool {
        self.ticker_active
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Time left in the current countdown; zero while disabled.
    pub fn remaining(&self) -> Duration {
        if self.mode.is_active() {
            self.deadline - self.clock.now()
        } else {
            Duration::zero()
        }
    }

    /// The label the status display currently shows.
    pub fn label(&self) -> String {
        status_label(self.mode, self.remaining(), self.settings.show_seconds)
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            remaining_secs: self.remaining().num_seconds().max(0),
            completed_count: self.completed_count,
            ticker_active: self.ticker_active,
            label: self.label(),
            at: self.clock.now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start_work(&mut self) -> Event {
        self.enter(Mode::Work, false)
    }

    pub fn start_break(&mut self) -> Event {
        self.enter(Mode::Break, false)
    }

    pub fn start_long_break(&mut self) -> Event {
        self.enter(Mode::LongBreak, false)
    }

    /// Stop the ticker and go idle. Safe to call repeatedly.
    pub fn disable(&mut self) -> Event {
        let from = self.mode;
        let now = self.clock.now();
        self.ticker_active = false;
        self.mode = Mode::Disabled;
        self.deadline = now;
        self.refresh();
        tracing::debug!(from = ?from, "pomodoro disabled");
        Event::Disabled { from, at: now }
    }

    /// Run the engine command behind a menu entry.
    ///
    /// Returns `None` for entries the host handles itself (quit, labels).
    pub fn apply(&mut self, action: MenuAction) -> Option<Event> {
        match action {
            MenuAction::StartWork => Some(self.start_work()),
            MenuAction::StartBreak => Some(self.start_break()),
            MenuAction::StartLongBreak => Some(self.start_long_break()),
            MenuAction::Disable => Some(self.disable()),
            MenuAction::Quit | MenuAction::Info => None,
        }
    }

    /// Call about once per second. Returns `Some(Event::ModeChanged)` when
    /// the countdown ran out and the engine moved on by itself.
    pub fn on_tick(&mut self) -> Option<Event> {
        if !self.ticker_active {
            return None;
        }

        if self.deadline - self.clock.now() <= Duration::zero() {
            match self.mode {
                Mode::Work => Some(self.complete_pomodoro()),
                Mode::Break | Mode::LongBreak => Some(self.enter(Mode::Work, true)),
                Mode::Disabled => None,
            }
        } else {
            self.refresh();
            None
        }
    }

    /// Push the current label to the status display.
    pub fn refresh(&mut self) {
        let label = self.label();
        self.display.set_label(&label);
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn ensure_ticker(&mut self) {
        if !self.ticker_active {
            tracing::debug!("ticker started");
            self.ticker_active = true;
        }
    }

    fn complete_pomodoro(&mut self) -> Event {
        self.completed_count += 1;
        let interval = u64::from(self.settings.long_break_interval.max(1));
        tracing::info!(completed = self.completed_count, "pomodoro completed");

        let next = if self.completed_count % interval == 0 {
            Mode::LongBreak
        } else {
            Mode::Break
        };
        self.enter(next, true)
    }

    fn enter(&mut self, mode: Mode, automatic: bool) -> Event {
        self.ensure_ticker();
        let from = self.mode;
        let now = self.clock.now();
        let countdown = self
            .settings
            .durations
            .for_mode(mode)
            .unwrap_or_else(Duration::zero);

        self.mode = mode;
        self.deadline = now + countdown;
        if let Some(text) = mode.announcement() {
            self.notifier.notify(APP_NAME, text);
        }
        self.refresh();

        tracing::debug!(from = ?from, to = ?mode, automatic, "mode changed");
        Event::ModeChanged {
            from,
            to: mode,
            automatic,
            completed_count: self.completed_count,
            deadline: self.deadline,
            at: now,
        }
    }
}
