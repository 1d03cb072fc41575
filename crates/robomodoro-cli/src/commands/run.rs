//! Interactive status-bar loop.
//!
//! Owns the single engine for the life of the process, ticks it at 1 Hz
//! while its ticker is active and maps shortcut keys to engine commands.

use std::time::Duration;

use robomodoro_core::menu::completed_title;
use robomodoro_core::{
    menu_items, Config, Event, MenuAction, Mode, PomodoroEngine, SystemClock,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval, MissedTickBehavior};

use super::menu::render;
use crate::host::{DesktopNotifier, TerminalDisplay};

const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub fn run(show_seconds: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();
    config.display.show_seconds |= show_seconds;

    let notifier = DesktopNotifier::new(
        config.presentation_policy(),
        config.notifications.timeout_secs,
    );
    let engine =
        PomodoroEngine::with_config(&config, TerminalDisplay::new(), notifier, SystemClock);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(event_loop(engine))
}

async fn event_loop(mut engine: PomodoroEngine) -> Result<(), Box<dyn std::error::Error>> {
    print_menu(engine.completed_count());
    engine.refresh();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick(), if engine.ticker_active() => {
                if let Some(event) = engine.on_tick() {
                    after_event(&mut engine, &event);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let Some(key) = line.trim().chars().next() else {
                    engine.refresh();
                    continue;
                };
                match MenuAction::from_key(key) {
                    Some(MenuAction::Quit) => break,
                    Some(action) => {
                        if let Some(event) = engine.apply(action) {
                            after_event(&mut engine, &event);
                        }
                    }
                    None => tracing::warn!("unknown shortcut '{key}'"),
                }
            }
            _ = &mut ctrl_c => break,
        }
    }

    println!();
    tracing::info!(completed = engine.completed_count(), "exiting");
    Ok(())
}

fn after_event(engine: &mut PomodoroEngine, event: &Event) {
    tracing::debug!(at = %event.at(), ?event, "engine event");
    // Only an automatic exit from Work finishes a pomodoro.
    if let Event::ModeChanged {
        from: Mode::Work,
        automatic: true,
        completed_count,
        ..
    } = event
    {
        print_completed(*completed_count);
        engine.refresh();
    }
}

fn print_menu(completed: u64) {
    for item in menu_items(completed) {
        println!("{}", render(&item));
    }
}

fn print_completed(completed: u64) {
    println!("\r\x1b[2K{}", completed_title(completed));
}
