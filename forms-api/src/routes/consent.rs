use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, Method},
    routing::any,
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;

use super::ApiError;
use crate::{
    app_state::AppState,
    domain::{
        models::{RequestMeta, SubmissionEnvelope},
        ConsentError,
    },
};

const FORWARDED_FOR: &str = "x-forwarded-for";

pub fn router() -> Router<AppState> {
    Router::new().route("/", any(save_consent))
}

#[derive(Debug, Serialize)]
struct ConsentSaved {
    success: bool,
    message: &'static str,
}

#[instrument(name = "save_consent", skip(headers, app_state, body))]
async fn save_consent(
    method: Method,
    headers: HeaderMap,
    State(app_state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ConsentSaved>, ApiError> {
    if method != Method::POST {
        return Err(ApiError::method_not_allowed());
    }

    let body = body.map_err(|rejection| ConsentError::UnreadableBody(rejection.body_text()))?;
    let envelope: SubmissionEnvelope = serde_json::from_slice(&body).map_err(ConsentError::from)?;
    app_state
        .consent
        .record(&envelope.payload.data, &request_meta(&headers))
        .await?;

    Ok(Json(ConsentSaved {
        success: true,
        message: "Consent recorded successfully",
    }))
}

fn request_meta(headers: &HeaderMap) -> RequestMeta {
    RequestMeta {
        forwarded_for: headers
            .get(FORWARDED_FOR)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    }
}
