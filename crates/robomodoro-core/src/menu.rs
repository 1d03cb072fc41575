//! Host-agnostic model of the status-bar menu.
//!
//! Every entry maps 1:1 to an engine command or a host lifecycle action,
//! with a single-key shortcut. Hosts render it however they like.

use serde::{Deserialize, Serialize};

use crate::timer::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    StartWork,
    StartBreak,
    StartLongBreak,
    Disable,
    /// Terminate the host. Never reaches the engine.
    Quit,
    /// Informational entry.
    Info,
}

impl MenuAction {
    /// Resolve a keyboard shortcut, case-insensitively.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            's' => Some(MenuAction::StartWork),
            'b' => Some(MenuAction::StartBreak),
            'l' => Some(MenuAction::StartLongBreak),
            'd' => Some(MenuAction::Disable),
            'q' => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub key: Option<char>,
    pub title: String,
    pub action: MenuAction,
}

impl MenuItem {
    fn command(key: char, title: String, action: MenuAction) -> Self {
        Self {
            key: Some(key),
            title,
            action,
        }
    }
}

/// Entries in display order. The completed counter is rebuilt each time so
/// hosts refresh the menu after every completion.
pub fn menu_items(completed_count: u64) -> Vec<MenuItem> {
    vec![
        MenuItem::command('s', mode_title(Mode::Work), MenuAction::StartWork),
        MenuItem::command('b', mode_title(Mode::Break), MenuAction::StartBreak),
        MenuItem::command('l', mode_title(Mode::LongBreak), MenuAction::StartLongBreak),
        MenuItem::command('d', "🔌 Disable".to_string(), MenuAction::Disable),
        MenuItem {
            key: None,
            title: completed_title(completed_count),
            action: MenuAction::Info,
        },
        MenuItem::command('q', "Quit".to_string(), MenuAction::Quit),
    ]
}

fn mode_title(mode: Mode) -> String {
    format!("{} {}", mode.glyph(), mode.label())
}

pub fn completed_title(completed_count: u64) -> String {
    format!("Completed: {completed_count}")
}
