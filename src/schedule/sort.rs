use crate::models::appointment::GroupedAppointment;
use crate::schedule::correction::ClockTime;

// Parsed times first, then times we could not read, then no time at all.
fn start_key(appointment: &GroupedAppointment) -> (u8, u32) {
    match appointment.display_time.as_deref() {
        Some(raw) => match ClockTime::parse_12h(raw) {
            Some(time) => (0, time.minute_of_day()),
            None => (1, 0),
        },
        None => (2, 0),
    }
}

/// Orders a day's appointments by start time. Ties keep their current order.
pub fn sort_by_start(appointments: &mut [GroupedAppointment]) {
    appointments.sort_by_key(start_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appt(name: &str, time: Option<&str>) -> GroupedAppointment {
        GroupedAppointment {
            customer_name: name.into(),
            display_time: time.map(String::from),
            services: vec![],
        }
    }

    fn names(list: &[GroupedAppointment]) -> Vec<&str> {
        list.iter().map(|a| a.customer_name.as_str()).collect()
    }

    #[test]
    fn test_orders_by_clock_not_text() {
        let mut list = vec![
            appt("a", Some("10:00 AM")),
            appt("b", Some("2:00 PM")),
            appt("c", Some("9:00 AM")),
            appt("d", Some("12:30 AM")),
        ];
        sort_by_start(&mut list);
        assert_eq!(names(&list), vec!["d", "c", "a", "b"]);
    }

    #[test]
    fn test_missing_times_go_last_in_encounter_order() {
        let mut list = vec![
            appt("x", None),
            appt("a", Some("3:00 PM")),
            appt("y", None),
            appt("b", Some("1:00 PM")),
            appt("z", Some("??")),
        ];
        sort_by_start(&mut list);
        assert_eq!(names(&list), vec!["b", "a", "z", "x", "y"]);
    }

    #[test]
    fn test_equal_times_are_stable() {
        let mut list = vec![appt("first", Some("9:00 AM")), appt("second", Some("9:00 AM"))];
        sort_by_start(&mut list);
        assert_eq!(names(&list), vec!["first", "second"]);
    }
}
