use chrono::Duration;
use robomodoro_core::format_remaining;

pub fn run(seconds: f64, show_seconds: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !seconds.is_finite() {
        return Err(format!("not a finite number of seconds: {seconds}").into());
    }
    // Everything below one second renders empty, negatives included.
    let millis = (seconds.max(0.0) * 1000.0).round() as i64;
    let remaining = Duration::try_milliseconds(millis)
        .ok_or_else(|| format!("remaining time out of range: {seconds}"))?;
    println!("{}", format_remaining(remaining, show_seconds));
    Ok(())
}
