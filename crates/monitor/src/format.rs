//! Human-readable duration formatting

/// Format a duration in seconds using the coarsest two units
/// ("59s", "2m 5s", "1h 0m", "1d 0h").
///
/// Every component truncates rather than rounds, so 90.9 seconds is
/// "1m 30s". Negative input truncates toward zero, which is what a
/// negative ETA after overshooting the target renders as.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{}s", seconds as i64)
    } else if seconds < 3600.0 {
        let minutes = (seconds / 60.0) as i64;
        let secs = (seconds % 60.0) as i64;
        format!("{}m {}s", minutes, secs)
    } else if seconds < 86400.0 {
        let hours = (seconds / 3600.0) as i64;
        let minutes = ((seconds % 3600.0) / 60.0) as i64;
        format!("{}h {}m", hours, minutes)
    } else {
        let days = (seconds / 86400.0) as i64;
        let hours = ((seconds % 86400.0) / 3600.0) as i64;
        format!("{}d {}h", days, hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_duration(0.0), "0s");
        assert_eq!(format_duration(59.0), "59s");
        assert_eq!(format_duration(60.0), "1m 0s");
        assert_eq!(format_duration(3599.0), "59m 59s");
        assert_eq!(format_duration(3600.0), "1h 0m");
        assert_eq!(format_duration(86399.0), "23h 59m");
        assert_eq!(format_duration(86400.0), "1d 0h");
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        assert_eq!(format_duration(125.0), "2m 5s");
        assert_eq!(format_duration(90.9), "1m 30s");
        assert_eq!(format_duration(59.99), "59s");
        assert_eq!(format_duration(3599.9), "59m 59s");
    }

    #[test]
    fn test_larger_spans() {
        // 2 days, 5 hours and change
        assert_eq!(format_duration(2.0 * 86400.0 + 5.0 * 3600.0 + 42.0), "2d 5h");
        // 1 hour 59 minutes
        assert_eq!(format_duration(3600.0 + 59.0 * 60.0 + 59.0), "1h 59m");
    }

    #[test]
    fn test_negative_truncates_toward_zero() {
        assert_eq!(format_duration(-2.7), "-2s");
        assert_eq!(format_duration(-0.3), "0s");
    }
}
