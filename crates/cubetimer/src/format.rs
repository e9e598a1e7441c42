//! `MM:SS.mmm` time formatting.

/// Shown in place of a best time when none has been recorded.
pub const NO_TIME: &str = "--:--.---";

/// Formats a duration in seconds as `MM:SS.mmm`.
///
/// Minutes are zero-padded to two digits and grow wider past 99. The value is
/// rounded to whole milliseconds before splitting, so `59.9996` reads
/// `01:00.000` rather than `00:60.000`. Negative and non-finite input reads
/// as zero.
pub fn format_time(seconds: f64) -> String {
    let millis = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };

    let minutes = millis / 60_000;
    let rem = millis % 60_000;
    format!("{:02}:{:02}.{:03}", minutes, rem / 1000, rem % 1000)
}

/// Formats an optional best time, using [`NO_TIME`] when there is none.
pub fn format_best(best: Option<f64>) -> String {
    best.map_or_else(|| NO_TIME.to_string(), format_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_all_zeroes() {
        assert_eq!(format_time(0.0), "00:00.000");
    }

    #[test]
    fn minutes_and_seconds_are_zero_padded() {
        assert_eq!(format_time(65.25), "01:05.250");
        assert_eq!(format_time(5.5), "00:05.500");
        assert_eq!(format_time(42.317), "00:42.317");
    }

    #[test]
    fn minutes_are_not_wrapped_into_hours() {
        assert_eq!(format_time(3605.001), "60:05.001");
    }

    #[test]
    fn minutes_widen_past_two_digits() {
        assert_eq!(format_time(100.0 * 60.0 + 1.5), "100:01.500");
    }

    #[test]
    fn rounding_carries_into_the_minute() {
        assert_eq!(format_time(59.9996), "01:00.000");
        assert_eq!(format_time(59.9994), "00:59.999");
    }

    #[test]
    fn former_sentinel_still_formats() {
        assert_eq!(format_time(99.0 * 60.0 + 59.999), "99:59.999");
    }

    #[test]
    fn negative_and_nan_read_as_zero() {
        assert_eq!(format_time(-3.0), "00:00.000");
        assert_eq!(format_time(f64::NAN), "00:00.000");
    }

    #[test]
    fn missing_best_uses_placeholder() {
        assert_eq!(format_best(None), "--:--.---");
        assert_eq!(format_best(Some(12.5)), "00:12.500");
    }
}
