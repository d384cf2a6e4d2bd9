use crate::models::appointment::GroupedAppointment;
use crate::schedule::correction::ClockTime;

/// How long a started appointment stays on today's board
pub const VISIBILITY_WINDOW_MINUTES: i64 = 180;

/// Whether a today appointment is still worth showing at `now`.
///
/// Appointments without a readable time are always kept. The age is a plain
/// difference of minutes since midnight and does not account for crossing
/// midnight.
pub fn is_visible(appointment: &GroupedAppointment, now: ClockTime) -> bool {
    let Some(start) = appointment
        .display_time
        .as_deref()
        .and_then(ClockTime::parse_12h)
    else {
        return true;
    };

    let age_minutes = i64::from(now.minute_of_day()) - i64::from(start.minute_of_day());
    age_minutes <= VISIBILITY_WINDOW_MINUTES
}

pub fn visible_today(appointments: &[GroupedAppointment], now: ClockTime) -> Vec<GroupedAppointment> {
    appointments
        .iter()
        .filter(|a| is_visible(a, now))
        .cloned()
        .collect()
}
