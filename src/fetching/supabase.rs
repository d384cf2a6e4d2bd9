use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::StoreConfig;
use crate::fetching::constants::*;
use crate::fetching::{AppointmentSource, FetchError};
use crate::models::appointment::RawAppointmentRow;

/// Reads `daily_appointments` through the Supabase REST API.
pub struct SupabaseSource {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl SupabaseSource {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let mut base = Url::parse(&config.url)
            .with_context(|| format!("invalid SUPABASE_URL {:?}", config.url))?;
        // join() drops the last path segment unless the base ends in a slash
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(APPOINTMENTS_PATH)
            .context("failed to build appointments endpoint")?;

        let client = Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .context("failed to build HTTP client")?;

        info!(endpoint = %endpoint, "Using Supabase appointment store");

        Ok(SupabaseSource {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    fn request_url(&self, business_id: &str, dates: &[NaiveDate]) -> Url {
        let dates = dates
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("select", SELECT_COLUMNS)
            .append_pair(LOCATION_COLUMN, &format!("eq.{business_id}"))
            .append_pair(DATE_COLUMN, &format!("in.({dates})"))
            .append_pair("order", ORDER_BY);
        url
    }
}

#[async_trait]
impl AppointmentSource for SupabaseSource {
    async fn fetch(
        &self,
        business_id: &str,
        dates: &[NaiveDate],
    ) -> Result<Vec<RawAppointmentRow>, FetchError> {
        let url = self.request_url(business_id, dates);
        debug!(url = %url, "Fetching appointment rows");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
