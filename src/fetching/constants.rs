// PostgREST inputs for the table the extraction job fills
pub const APPOINTMENTS_PATH: &str = "rest/v1/daily_appointments";

// Columns the board reads; everything else in the table is ignored
pub const SELECT_COLUMNS: &str =
    "customer_name,service_type,appointment_date,appointment_time_12h,location_id";

pub const LOCATION_COLUMN: &str = "location_id";
pub const DATE_COLUMN: &str = "appointment_date";

// Rows come back ordered by stored time so the first row per customer is the earliest
pub const ORDER_BY: &str = "appointment_time.asc";

pub const API_KEY_HEADER: &str = "apikey";
