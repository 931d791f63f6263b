use exam_core::time::format_countdown;

/// Below this many seconds the countdown is highlighted.
pub const LOW_TIME_SECONDS: u32 = 60;

#[must_use]
pub fn format_timer(remaining_seconds: u32) -> String {
    format_countdown(remaining_seconds)
}

#[must_use]
pub fn timer_class(remaining_seconds: u32) -> &'static str {
    if remaining_seconds < LOW_TIME_SECONDS {
        "timer timer-low"
    } else {
        "timer"
    }
}

#[must_use]
pub fn format_elapsed(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    if minutes == 0 {
        format!("{remainder}s")
    } else {
        format!("{minutes}m {remainder}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_label_is_mm_ss() {
        assert_eq!(format_timer(1800), "30:00");
        assert_eq!(format_timer(59), "00:59");
        assert_eq!(timer_class(59), "timer timer-low");
        assert_eq!(timer_class(60), "timer");
    }

    #[test]
    fn elapsed_drops_zero_minutes() {
        assert_eq!(format_elapsed(42), "42s");
        assert_eq!(format_elapsed(600), "10m 0s");
    }
}
