use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Name shown for rows that carry no customer name at all
pub const WALK_IN: &str = "Walk-in";

/// One service line as stored in `daily_appointments`.
///
/// The store writes one row per booked service, so a customer with two
/// services on the same day shows up twice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAppointmentRow {
    #[serde(default)]
    pub appointment_date: Option<String>,
    #[serde(default, rename = "appointment_time_12h")]
    pub appointment_time_raw: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, rename = "service_type")]
    pub service_name: Option<String>,
    #[allow(dead_code)] // the store is already filtered on it
    #[serde(default, rename = "location_id", deserialize_with = "string_or_number")]
    pub location_business_id: Option<String>,
}

impl RawAppointmentRow {
    /// Name used to group rows into one appointment.
    pub fn customer_identity(&self) -> String {
        if let Some(name) = non_blank(self.customer_name.as_deref()) {
            return name.to_string();
        }

        let full_name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .filter_map(non_blank)
            .collect::<Vec<_>>()
            .join(" ");

        if full_name.is_empty() {
            WALK_IN.to_string()
        } else {
            full_name
        }
    }

    /// Calendar date of the row. Accepts a bare date or a datetime and ignores
    /// the time component.
    pub fn date_key(&self) -> Option<NaiveDate> {
        let raw = non_blank(self.appointment_date.as_deref())?;
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    pub fn service(&self) -> Option<&str> {
        non_blank(self.service_name.as_deref())
    }
}

/// A customer's visit for one day with all of its service lines merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedAppointment {
    pub customer_name: String,
    pub display_time: Option<String>,
    pub services: Vec<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// location_id comes back as a number or a string depending on the column type
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
