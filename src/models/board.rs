use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::appointment::GroupedAppointment;
use crate::schedule::correction::ClockTime;
use crate::schedule::visibility::visible_today;
use crate::schedule::window::DateWindow;

/// One day's column on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBoard {
    pub date: NaiveDate,
    pub appointments: Vec<GroupedAppointment>,
    pub is_empty: bool,
}

impl DayBoard {
    pub fn new(date: NaiveDate, appointments: Vec<GroupedAppointment>) -> Self {
        DayBoard {
            date,
            is_empty: appointments.is_empty(),
            appointments,
        }
    }
}

/// Result of one committed refresh cycle.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub window: DateWindow,
    pub today: Vec<GroupedAppointment>,
    pub tomorrow: Vec<GroupedAppointment>,
    pub refreshed_at: DateTime<Utc>,
    pub sequence: u64,
}

impl BoardSnapshot {
    /// Today's appointments still inside the visibility window at `now`.
    pub fn today_at(&self, now: ClockTime) -> DayBoard {
        DayBoard::new(self.window.today, visible_today(&self.today, now))
    }

    pub fn tomorrow(&self) -> DayBoard {
        DayBoard::new(self.window.tomorrow, self.tomorrow.clone())
    }
}

/// What the screen renders.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub location: String,
    pub current_time: String,
    pub loaded: bool,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub today: DayBoard,
    pub tomorrow: DayBoard,
}
