//! Terminal implementations of the engine's output ports.

use std::io::Write;

use notify_rust::{Notification, Timeout};
use robomodoro_core::{Notifier, PresentationPolicy, StatusDisplay};

/// Redraws the status label in place on the current terminal line.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl StatusDisplay for TerminalDisplay {
    fn set_label(&mut self, text: &str) {
        let mut out = std::io::stdout().lock();
        // Clear the line first so a shorter label leaves no residue.
        let _ = write!(out, "\r\x1b[2K{text}");
        let _ = out.flush();
    }
}

/// Hands a built notification to the platform.
type Deliver = fn(Notification);

/// Shows engine announcements as desktop notifications.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    policy: PresentationPolicy,
    timeout_ms: u32,
    deliver: Deliver,
}

impl DesktopNotifier {
    pub fn new(policy: PresentationPolicy, timeout_secs: u32) -> Self {
        Self::with_delivery(policy, timeout_secs, deliver_detached)
    }

    fn with_delivery(policy: PresentationPolicy, timeout_secs: u32, deliver: Deliver) -> Self {
        Self {
            policy,
            timeout_ms: timeout_secs.saturating_mul(1000),
            deliver,
        }
    }

    fn build(&self, title: &str, subtitle: &str) -> Notification {
        let mut notification = Notification::new();
        notification
            .summary(title)
            .body(subtitle)
            .timeout(Timeout::Milliseconds(self.timeout_ms));
        notification
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&mut self, title: &str, subtitle: &str) {
        if !self.policy.should_present() {
            tracing::debug!(subtitle, "notification suppressed by policy");
            return;
        }
        (self.deliver)(self.build(title, subtitle));
    }
}

/// `show()` blocks on the notification daemon, so inside a runtime it
/// runs on the blocking pool and the tick loop never waits for it.
fn deliver_detached(notification: Notification) {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn_blocking(move || show(&notification));
        }
        Err(_) => show(&notification),
    }
}

fn show(notification: &Notification) {
    if let Err(e) = notification.show() {
        tracing::warn!("Failed to send notification: {e}");
    }
}
