//! # Robomodoro Core Library
//!
//! This library provides the core logic for the Robomodoro status-bar
//! Pomodoro timer. Hosts (the terminal binary, or any tray/menu-bar shell)
//! stay thin: they own one [`PomodoroEngine`], deliver ticks, map menu
//! entries to engine commands and implement the two output ports.
//!
//! ## Architecture
//!
//! - **Timer Engine**: A deadline-based state machine that requires the
//!   caller to periodically invoke `on_tick()` while its ticker is active
//! - **Ports**: [`StatusDisplay`], [`Notifier`] and [`Clock`] traits the
//!   engine calls out through
//! - **Menu**: Shortcut-to-command model shared by all hosts
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`PomodoroEngine`]: Core mode state machine
//! - [`format_remaining`]: Countdown rendering for the status label
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod menu;
pub mod ports;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use menu::{menu_items, MenuAction, MenuItem};
pub use ports::{
    Clock, ManualClock, Notifier, NullDisplay, NullNotifier, PresentationPolicy, StatusDisplay,
    SystemClock,
};
pub use storage::Config;
pub use timer::{format_remaining, status_label, Durations, EngineSettings, Mode, PomodoroEngine};
