pub mod aggregate;
pub mod correction;
pub mod sort;
pub mod visibility;
pub mod window;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::appointment::RawAppointmentRow;
use crate::models::board::BoardSnapshot;
use aggregate::group_by_customer;
use sort::sort_by_start;
use window::{DateWindow, Day};

/// Turns one fetch worth of rows into a snapshot of both days.
///
/// Today's list is stored sorted but unfiltered; the visibility window is
/// applied when the board is read so that it follows the clock.
pub fn build_snapshot(
    rows: &[RawAppointmentRow],
    window: DateWindow,
    sequence: u64,
    refreshed_at: DateTime<Utc>,
) -> BoardSnapshot {
    let mut today_rows = Vec::new();
    let mut tomorrow_rows = Vec::new();

    for row in rows {
        match row.date_key().and_then(|date| window.day_of(date)) {
            Some(Day::Today) => today_rows.push(row),
            Some(Day::Tomorrow) => tomorrow_rows.push(row),
            None => debug!(
                date = ?row.appointment_date,
                "Skipping row outside the board window"
            ),
        }
    }

    let mut today = group_by_customer(today_rows);
    let mut tomorrow = group_by_customer(tomorrow_rows);
    sort_by_start(&mut today);
    sort_by_start(&mut tomorrow);

    BoardSnapshot {
        window,
        today,
        tomorrow,
        refreshed_at,
        sequence,
    }
}
