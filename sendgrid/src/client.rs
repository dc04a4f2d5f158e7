use thiserror::Error;

use crate::{mail::MailSendRequest, Mail};

pub const SENDGRID_API_URL: &str = "https://api.sendgrid.com";

#[derive(Debug, Error)]
pub enum SendGridError {
    #[error("request to SendGrid failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("SendGrid rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Client for the SendGrid v3 mail-send endpoint.
#[derive(Clone)]
pub struct SendGridClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SendGridClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, SENDGRID_API_URL)
    }

    /// Points the client at another host, e.g. a sandbox or a local stub.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn mail_send_url(&self) -> String {
        format!("{}/v3/mail/send", self.base_url)
    }

    pub async fn send(&self, mail: &Mail) -> Result<(), SendGridError> {
        let resp = self
            .http
            .post(self.mail_send_url())
            .bearer_auth(&self.api_key)
            .json(&MailSendRequest::from(mail))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SendGridError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(to = %mail.to.email, status = status.as_u16(), "mail accepted");
        Ok(())
    }
}
