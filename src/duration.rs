//! Human-readable duration formatting

/// Format a duration given in milliseconds.
///
/// Below one second the value stays in milliseconds, below one minute it is
/// shown in seconds, anything longer in minutes. Always two decimals.
pub fn format_duration(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{:.2}ms", ms)
    } else if ms < 60_000.0 {
        format!("{:.2}s", ms / 1000.0)
    } else {
        format!("{:.2}m", ms / 60_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milliseconds() {
        assert_eq!(format_duration(0.0), "0.00ms");
        assert_eq!(format_duration(123.456), "123.46ms");
        assert_eq!(format_duration(999.99), "999.99ms");
    }

    #[test]
    fn test_seconds_boundary() {
        assert_eq!(format_duration(1000.0), "1.00s");
        assert_eq!(format_duration(1500.0), "1.50s");
        assert!(format_duration(59_999.0).ends_with('s'));
        assert!(!format_duration(59_999.0).ends_with("ms"));
    }

    #[test]
    fn test_minutes_boundary() {
        assert_eq!(format_duration(60_000.0), "1.00m");
        assert_eq!(format_duration(90_000.0), "1.50m");
        assert_eq!(format_duration(3_600_000.0), "60.00m");
    }
}
