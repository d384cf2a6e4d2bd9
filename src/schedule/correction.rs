use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/**
The appointment store labels times as if they were recorded seven hours ahead
of the shop's wall clock. Undoing it is a flat subtraction, so it is off by an
hour whenever daylight saving time is not in effect.
*/
pub const CLOCK_SKEW_HOURS: i32 = 7;

/// Placeholder the store uses for rows without a time
pub const NO_TIME: &str = "No time";

static TWELVE_HOUR_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})\s*([AaPp][Mm])$").expect("valid 12-hour time pattern")
});

/// A wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Parses `H:MM AM` / `HH:MM PM`.
    pub fn parse_12h(raw: &str) -> Option<Self> {
        let caps = TWELVE_HOUR_TIME.captures(raw.trim())?;
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;

        if !(1..=12).contains(&hour) || minute > 59 {
            return None;
        }

        let is_pm = caps[3].eq_ignore_ascii_case("pm");
        let hour = match (hour, is_pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };

        Some(ClockTime { hour, minute })
    }

    pub fn minute_of_day(self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Moves the hour by `hours`, wrapping across midnight in either direction.
    pub fn shift_hours(self, hours: i32) -> Self {
        let mut hour = self.hour as i32 + hours;
        if hour < 0 {
            hour += 24;
        }
        ClockTime {
            hour: (hour % 24) as u32,
            minute: self.minute,
        }
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        ClockTime {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        write!(f, "{}:{:02} {}", hour, self.minute, meridiem)
    }
}

/// Converts a stored time into the shop's local time.
///
/// Anything that does not parse, including [`NO_TIME`], comes back untouched.
pub fn correct_time(raw: &str) -> String {
    match ClockTime::parse_12h(raw) {
        Some(time) => time.shift_hours(-CLOCK_SKEW_HOURS).to_string(),
        None => raw.to_string(),
    }
}

/// Display time for a row, or `None` when the row has no usable time.
pub fn display_time(raw: Option<&str>) -> Option<String> {
    let raw = raw
        .map(str::trim)
        .filter(|r| !r.is_empty() && !r.eq_ignore_ascii_case(NO_TIME))?;
    Some(correct_time(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight_wraps_to_previous_evening() {
        assert_eq!(correct_time("12:00 AM"), "5:00 PM");
    }

    #[test]
    fn test_morning_shift() {
        assert_eq!(correct_time("9:15 AM"), "2:15 AM");
        assert_eq!(correct_time("04:30 PM"), "9:30 AM");
        assert_eq!(correct_time("7:05 pm"), "12:05 PM");
        assert_eq!(correct_time("7:00 AM"), "12:00 AM");
    }

    #[test]
    fn test_shift_back_restores_original() {
        for meridiem in ["AM", "PM"] {
            for hour in 1..=12 {
                for minute in [0, 7, 30, 59] {
                    let original = format!("{}:{:02} {}", hour, minute, meridiem);
                    let corrected = ClockTime::parse_12h(&correct_time(&original)).unwrap();
                    assert_eq!(corrected.shift_hours(CLOCK_SKEW_HOURS).to_string(), original);
                }
            }
        }
    }

    #[test]
    fn test_malformed_input_passes_through() {
        assert_eq!(correct_time("soon"), "soon");
        assert_eq!(correct_time("13:00 PM"), "13:00 PM");
        assert_eq!(correct_time("9:75 AM"), "9:75 AM");
        assert_eq!(correct_time("14:30"), "14:30");
        assert_eq!(correct_time(NO_TIME), NO_TIME);
    }

    #[test]
    fn test_display_time_treats_placeholder_as_absent() {
        assert_eq!(display_time(None), None);
        assert_eq!(display_time(Some("")), None);
        assert_eq!(display_time(Some("No time")), None);
        assert_eq!(display_time(Some("10:00 AM")).as_deref(), Some("3:00 AM"));
        assert_eq!(display_time(Some("garbled")).as_deref(), Some("garbled"));
    }

    #[test]
    fn test_minute_of_day() {
        assert_eq!(ClockTime::parse_12h("12:10 AM").unwrap().minute_of_day(), 10);
        assert_eq!(ClockTime::parse_12h("12:10 PM").unwrap().minute_of_day(), 730);
        assert_eq!(ClockTime::parse_12h("11:59 PM").unwrap().minute_of_day(), 1439);
    }
}
