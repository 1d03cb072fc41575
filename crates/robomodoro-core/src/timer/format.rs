//! Countdown rendering for the status label.
//!
//! Two styles exist:
//!
//! - minutes only (default): the remaining time rounded to the nearest
//!   minute, so 30s shows as `1` while 29s shows as `0`.
//! - `MM:SS`: truncated minutes and seconds, both zero-padded.
//!
//! Anything under one second renders as an empty string so the label never
//! flickers through `00:00` at a mode boundary. Both styles wrap minutes at
//! 60; hours are never shown.

use chrono::Duration;

use super::mode::Mode;

/// Render `remaining` for the status label.
pub fn format_remaining(remaining: Duration, show_seconds: bool) -> String {
    if remaining < Duration::seconds(1) {
        return String::new();
    }

    if show_seconds {
        let total = remaining.num_seconds();
        let minutes = (total / 60) % 60;
        let seconds = total % 60;
        format!("{minutes:02}:{seconds:02}")
    } else {
        let secs = remaining.num_milliseconds() as f64 / 1000.0;
        let minutes = ((secs / 60.0).round() as i64) % 60;
        format!("{minutes}")
    }
}

/// Full status label: `<glyph> <remaining>`, or the glyph alone when there
/// is nothing to count down.
pub fn status_label(mode: Mode, remaining: Duration, show_seconds: bool) -> String {
    let formatted = if mode.is_active() {
        format_remaining(remaining, show_seconds)
    } else {
        String::new()
    };

    if formatted.is_empty() {
        mode.glyph().to_string()
    } else {
        format!("{} {}", mode.glyph(), formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn secs(s: i64) -> Duration {
        Duration::seconds(s)
    }

    #[test]
    fn below_one_second_is_empty() {
        for d in [
            Duration::zero(),
            Duration::milliseconds(999),
            secs(-5),
            Duration::milliseconds(-1),
        ] {
            assert_eq!(format_remaining(d, true), "");
            assert_eq!(format_remaining(d, false), "");
        }
    }

    #[test]
    fn seconds_style_uses_floor() {
        assert_eq!(format_remaining(secs(125), true), "02:05");
        assert_eq!(format_remaining(secs(1), true), "00:01");
        assert_eq!(format_remaining(secs(1500), true), "25:00");
        assert_eq!(format_remaining(Duration::milliseconds(59_999), true), "00:59");
    }

    #[test]
    fn seconds_style_wraps_at_an_hour() {
        assert_eq!(format_remaining(secs(3600), true), "00:00");
        assert_eq!(format_remaining(secs(3661), true), "01:01");
    }

    #[test]
    fn minute_style_rounds_to_nearest() {
        assert_eq!(format_remaining(secs(29), false), "0");
        assert_eq!(format_remaining(secs(30), false), "1");
        assert_eq!(format_remaining(secs(90), false), "2");
        assert_eq!(format_remaining(secs(89), false), "1");
        assert_eq!(format_remaining(secs(1500), false), "25");
    }

    #[test]
    fn minute_style_half_minute_boundary() {
        assert_eq!(format_remaining(Duration::milliseconds(29_999), false), "0");
        assert_eq!(format_remaining(Duration::milliseconds(30_000), false), "1");
    }

    #[test]
    fn minute_style_wraps_at_an_hour() {
        assert_eq!(format_remaining(secs(3599), false), "0");
        assert_eq!(format_remaining(secs(3690), false), "2");
    }

    #[test]
    fn disabled_label_is_glyph_only() {
        assert_eq!(status_label(Mode::Disabled, secs(600), false), "🍅");
        assert_eq!(status_label(Mode::Disabled, Duration::zero(), true), "🍅");
    }

    #[test]
    fn active_label_has_glyph_and_time() {
        assert_eq!(status_label(Mode::Work, secs(1500), false), "👔 25");
        assert_eq!(status_label(Mode::Break, secs(125), true), "☕ 02:05");
        assert_eq!(status_label(Mode::LongBreak, secs(900), true), "🌴 15:00");
        assert_eq!(status_label(Mode::Work, Duration::milliseconds(500), true), "👔");
    }

    proptest! {
        #[test]
        fn seconds_style_is_padded_floor(total in 1i64..=360_000) {
            let expected = format!("{:02}:{:02}", (total / 60) % 60, total % 60);
            prop_assert_eq!(format_remaining(secs(total), true), expected);
        }

        #[test]
        fn sub_second_is_always_empty(ms in -10_000i64..1000, show_seconds in any::<bool>()) {
            prop_assert_eq!(format_remaining(Duration::milliseconds(ms), show_seconds), "");
        }

        #[test]
        fn minute_style_stays_below_sixty(total in 1i64..=360_000) {
            let minutes: i64 = format_remaining(secs(total), false).parse().unwrap();
            prop_assert!((0..60).contains(&minutes));
        }
    }
}
