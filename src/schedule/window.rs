use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// The only timezone the board is shown in.
pub const LOCAL_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

pub fn local_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&LOCAL_TIMEZONE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Today,
    Tomorrow,
}

/// The two calendar days the board covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub today: NaiveDate,
    pub tomorrow: NaiveDate,
}

impl DateWindow {
    /// Window for `instant`, evaluated in [`LOCAL_TIMEZONE`] regardless of the
    /// zone the instant carries.
    pub fn at<T: TimeZone>(instant: &DateTime<T>) -> Self {
        let today = instant.with_timezone(&LOCAL_TIMEZONE).date_naive();
        // succ_opt only fails at NaiveDate::MAX
        let tomorrow = today.succ_opt().unwrap_or(today);
        DateWindow { today, tomorrow }
    }

    pub fn dates(&self) -> [NaiveDate; 2] {
        [self.today, self.tomorrow]
    }

    pub fn day_of(&self, date: NaiveDate) -> Option<Day> {
        if date == self.today {
            Some(Day::Today)
        } else if date == self.tomorrow {
            Some(Day::Tomorrow)
        } else {
            None
        }
    }
}
