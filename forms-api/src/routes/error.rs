//! Error-to-response policies.
//!
//! The two handlers deliberately disagree. The form-submission hook must
//! never look failed to the form host, so delivery problems are reported in
//! the body of a `200`. The consent hook fails loudly with a `500` so lost
//! consent data is visible to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::{ConsentError, DispatchError};

pub(crate) const EMAILS_SENT: &str = "Emails sent successfully";
pub(crate) const EMAIL_FAILED: &str = "Form received but email failed";
pub(crate) const CONSENT_FAILED: &str = "Failed to save consent";
pub(crate) const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

#[derive(Serialize)]
struct DispatchBody {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Maps the outcome of sending form emails to a response.
///
/// Always `200 OK`; callers must read `message` to tell success from
/// failure.
pub(crate) fn dispatch_outcome_response(outcome: Result<(), DispatchError>) -> Response {
    let body = match outcome {
        Ok(()) => DispatchBody {
            message: EMAILS_SENT,
            error: None,
        },
        Err(err) => {
            tracing::error!("Error sending email: {:?}", err);
            DispatchBody {
                message: EMAIL_FAILED,
                error: Some(err.to_string()),
            }
        }
    };

    (StatusCode::OK, Json(body)).into_response()
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ConsentError> for ApiError {
    fn from(err: ConsentError) -> Self {
        tracing::error!("Consent error: {:?}", err);
        Self::internal(CONSENT_FAILED)
    }
}
