use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tracing::instrument;

use super::error::{dispatch_outcome_response, METHOD_NOT_ALLOWED};
use crate::{
    app_state::AppState,
    domain::{models::FormSubmission, DispatchError},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", any(form_submission))
}

#[instrument(name = "form_submission", skip(app_state, body))]
async fn form_submission(
    method: Method,
    State(app_state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED).into_response();
    }

    dispatch_outcome_response(dispatch(&app_state, &body).await)
}

async fn dispatch(
    app_state: &AppState,
    body: &Result<Bytes, BytesRejection>,
) -> Result<(), DispatchError> {
    let body = body
        .as_ref()
        .map_err(|rejection| DispatchError::UnreadableBody(rejection.body_text()))?;
    let submission: FormSubmission = serde_json::from_slice(body)?;
    app_state.notifications.dispatch(&submission).await
}
