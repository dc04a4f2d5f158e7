use thiserror::Error;

/// Failures while sending the confirmation and admin emails.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to read form submission: {0}")]
    UnreadableBody(String),
    #[error("invalid form submission: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

impl DispatchError {
    pub fn delivery(msg: impl Into<String>) -> Self {
        Self::Delivery(msg.into())
    }
}

/// Failures while recording a consent submission.
#[derive(Debug, Error)]
pub enum ConsentError {
    #[error("failed to read consent submission: {0}")]
    UnreadableBody(String),
    #[error("invalid consent submission: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("forwarding consent record failed: {0}")]
    Forward(String),
}

impl ConsentError {
    pub fn forward(msg: impl Into<String>) -> Self {
        Self::Forward(msg.into())
    }
}
