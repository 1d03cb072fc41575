use robomodoro_core::{Clock, Config, ManualClock, NullDisplay, NullNotifier, PomodoroEngine};

/// Start a work block and let `cycles` countdowns expire on a manual clock,
/// printing every event as a JSON line.
pub fn run(cycles: u32) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let clock = ManualClock::default();
    let mut engine =
        PomodoroEngine::with_config(&config, NullDisplay, NullNotifier, clock.clone());

    println!("{}", serde_json::to_string(&engine.start_work())?);
    for _ in 0..cycles {
        clock.set(engine.deadline());
        if let Some(event) = engine.on_tick() {
            println!("{}", serde_json::to_string(&event)?);
        }
    }
    println!("{}", serde_json::to_string(&engine.snapshot())?);
    tracing::debug!(at = %clock.now(), completed = engine.completed_count(), "simulation finished");
    Ok(())
}
