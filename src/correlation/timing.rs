//! Timestamps and round-trip formatting.

use std::time::Duration;

use chrono::Local;

/// Duration text used when no matching request is pending.
pub const UNKNOWN_DURATION: &str = "unknown";

/// Whole milliseconds below one second, seconds with millisecond precision above.
///
/// Rounding happens first, so 999.6 ms reads `1.000 s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = (elapsed.as_secs_f64() * 1000.0).round();
    if millis >= 1000.0 {
        format!("{:.3} s", millis / 1000.0)
    } else {
        format!("{:.0} ms", millis)
    }
}

/// Local wall-clock time as `yyyy-MM-dd HH:mm:ss.SSS`.
pub fn log_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_second_is_milliseconds() {
        assert_eq!(format_elapsed(Duration::from_millis(450)), "450 ms");
        assert_eq!(format_elapsed(Duration::ZERO), "0 ms");
        assert_eq!(format_elapsed(Duration::from_micros(999_400)), "999 ms");
    }

    #[test]
    fn test_seconds_have_millisecond_precision() {
        assert_eq!(format_elapsed(Duration::from_millis(1234)), "1.234 s");
        assert_eq!(format_elapsed(Duration::from_secs(1)), "1.000 s");
        assert_eq!(format_elapsed(Duration::from_millis(61_005)), "61.005 s");
    }

    #[test]
    fn test_rounding_up_to_a_second_switches_unit() {
        assert_eq!(format_elapsed(Duration::from_micros(999_600)), "1.000 s");
        assert_eq!(format_elapsed(Duration::from_micros(999_499)), "999 ms");
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = log_timestamp();
        // 2024-01-31 12:34:56.789
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[19..20], ".");
    }
}
