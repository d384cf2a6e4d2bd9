use std::collections::HashMap;

use crate::models::appointment::{GroupedAppointment, RawAppointmentRow};
use crate::schedule::correction::display_time;

/// Merges one day's rows into one appointment per customer.
///
/// Rows must be in store order. The first row seen for a customer fixes the
/// appointment's time and its position in the output; later rows only add
/// services. Customers are matched on name alone, so two people sharing a
/// name end up merged.
pub fn group_by_customer<'a, I>(rows: I) -> Vec<GroupedAppointment>
where
    I: IntoIterator<Item = &'a RawAppointmentRow>,
{
    let mut grouped: Vec<GroupedAppointment> = Vec::new();
    let mut index_by_customer: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let customer = row.customer_identity();

        let idx = match index_by_customer.get(&customer) {
            Some(&idx) => idx,
            None => {
                grouped.push(GroupedAppointment {
                    customer_name: customer.clone(),
                    display_time: display_time(row.appointment_time_raw.as_deref()),
                    services: Vec::new(),
                });
                index_by_customer.insert(customer, grouped.len() - 1);
                grouped.len() - 1
            }
        };

        if let Some(service) = row.service() {
            grouped[idx].services.push(service.to_string());
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::WALK_IN;

    fn row(name: Option<&str>, time: Option<&str>, service: Option<&str>) -> RawAppointmentRow {
        RawAppointmentRow {
            appointment_date: Some("2024-06-10".into()),
            appointment_time_raw: time.map(String::from),
            customer_name: name.map(String::from),
            service_name: service.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_services_merge_in_row_order() {
        let rows = vec![
            row(Some("Ana Cruz"), Some("3:00 PM"), Some("Oil Change")),
            row(Some("Ana Cruz"), Some("3:00 PM"), Some("Tire Rotation")),
        ];

        let grouped = group_by_customer(&rows);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].customer_name, "Ana Cruz");
        assert_eq!(grouped[0].services, vec!["Oil Change", "Tire Rotation"]);
        assert_eq!(grouped[0].display_time.as_deref(), Some("8:00 AM"));
    }

    #[test]
    fn test_first_row_fixes_time_and_order() {
        let rows = vec![
            row(Some("Ben"), Some("4:00 PM"), Some("Alignment")),
            row(Some("Ana"), Some("5:00 PM"), Some("Brakes")),
            row(Some("Ben"), Some("6:00 PM"), Some("Wipers")),
        ];

        let grouped = group_by_customer(&rows);
        let names: Vec<_> = grouped.iter().map(|g| g.customer_name.as_str()).collect();
        assert_eq!(names, vec!["Ben", "Ana"]);
        assert_eq!(grouped[0].display_time.as_deref(), Some("9:00 AM"));
        assert_eq!(grouped[0].services, vec!["Alignment", "Wipers"]);
    }

    #[test]
    fn test_rows_without_service_add_nothing() {
        let rows = vec![
            row(Some("Cal"), None, None),
            row(Some("Cal"), Some("1:00 PM"), Some("  ")),
            row(None, Some("2:00 PM"), Some("Battery")),
        ];

        let grouped = group_by_customer(&rows);
        assert_eq!(grouped.len(), 2);
        assert!(grouped[0].services.is_empty());
        assert_eq!(grouped[0].display_time, None);
        assert_eq!(grouped[1].customer_name, WALK_IN);
        assert_eq!(grouped[1].services, vec!["Battery"]);
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<RawAppointmentRow> = Vec::new();
        assert!(group_by_customer(&rows).is_empty());
    }
}
