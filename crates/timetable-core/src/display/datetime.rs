//! Timestamp and clock-time formatting.

use std::fmt;

use jiff::{Timestamp, civil::Time, tz::TimeZone};

/// Formats a `Timestamp` in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats a wall-clock time the way period labels do: `8:30am`, `2:00pm`.
pub struct ClockTime(pub Time);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%-I:%M%P"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;
    use crate::models::Period;

    #[test]
    fn test_clock_time_matches_period_labels() {
        for period in Period::ALL.into_iter().filter(Period::is_bookable) {
            let (start, end) = period.clock_range();
            let label = format!("{}-{}", ClockTime(start), ClockTime(end));
            assert_eq!(label, period.label());
        }
    }

    #[test]
    fn test_clock_time_afternoon() {
        assert_eq!(ClockTime(time(15, 30, 0, 0)).to_string(), "3:30pm");
    }
}
