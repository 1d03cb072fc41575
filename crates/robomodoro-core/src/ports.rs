//! Outbound interfaces the engine calls into.
//!
//! The host implements [`StatusDisplay`] and [`Notifier`] on top of whatever
//! the platform offers (a tray title, a terminal line, a desktop
//! notification). Both calls are fire-and-forget: they return nothing and
//! the engine never reacts to their outcome.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Renders the short status label.
pub trait StatusDisplay: Send {
    fn set_label(&mut self, text: &str);
}

/// Announces mode changes.
pub trait Notifier: Send {
    fn notify(&mut self, title: &str, subtitle: &str);
}

/// Source of the current wall-clock time.
///
/// Deadlines are absolute, so a wall clock keeps countdowns correct across
/// host suspend and resume.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;
}

/// Whether a host notifier should actually present a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationPolicy {
    #[default]
    Always,
    Never,
}

impl PresentationPolicy {
    pub fn should_present(&self) -> bool {
        matches!(self, PresentationPolicy::Always)
    }
}

impl From<bool> for PresentationPolicy {
    fn from(enabled: bool) -> Self {
        if enabled {
            PresentationPolicy::Always
        } else {
            PresentationPolicy::Never
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same instant, so a test can keep one handle and give
/// another to the engine.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = to;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Display that discards every label.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl StatusDisplay for NullDisplay {
    fn set_label(&mut self, _text: &str) {}
}

/// Notifier that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _title: &str, _subtitle: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let start = Utc::now();
        let clock = ManualClock::new(start);
        let handle = clock.clone();
        handle.advance(Duration::seconds(90));
        assert_eq!(clock.now(), start + Duration::seconds(90));
    }

    #[test]
    fn default_policy_always_presents() {
        assert!(PresentationPolicy::default().should_present());
        assert!(!PresentationPolicy::from(false).should_present());
    }
}
