use async_trait::async_trait;

use crate::domain::{models::ConsentRecord, ports::outbound::ConsentStore, ConsentError};

/// Forwards consent records to the Apps Script web app in front of the
/// consent spreadsheet.
pub struct SheetsConsentStore {
    http: reqwest::Client,
    endpoint_url: String,
}

impl SheetsConsentStore {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint_url: endpoint_url.into(),
        }
    }
}

#[async_trait]
impl ConsentStore for SheetsConsentStore {
    async fn forward(&self, record: &ConsentRecord) -> Result<(), ConsentError> {
        let resp = self
            .http
            .post(&self.endpoint_url)
            .json(record)
            .send()
            .await
            .map_err(|e| ConsentError::forward(e.to_string()))?;

        // Only transport failures count; the script's reply status is advisory.
        let status = resp.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "consent record forwarded");
        } else {
            tracing::warn!(
                status = status.as_u16(),
                "storage endpoint responded with error status"
            );
        }
        Ok(())
    }
}
