pub mod constants;
pub mod supabase;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::appointment::RawAppointmentRow;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to appointment store failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("appointment store answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("could not decode appointment rows: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where appointment rows come from.
#[async_trait]
pub trait AppointmentSource: Send + Sync {
    /// Rows for one location on the given dates, ordered by stored time.
    async fn fetch(
        &self,
        business_id: &str,
        dates: &[NaiveDate],
    ) -> Result<Vec<RawAppointmentRow>, FetchError>;
}
