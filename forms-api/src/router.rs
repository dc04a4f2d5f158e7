use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::ApplicationSettings, routes};

pub fn create(app_state: AppState, config: &ApplicationSettings) -> Router<()> {
    // The hooks are served both at short paths and at the paths the site's
    // forms were originally configured with.
    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/form-submission", routes::form_submission::router())
        .nest(
            "/.netlify/functions/form-submission",
            routes::form_submission::router(),
        )
        .nest("/save-to-sheets", routes::consent::router())
        .nest(
            "/.netlify/functions/save-to-sheets",
            routes::consent::router(),
        );

    app.with_state(app_state)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed_origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|e| tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allow_origin)
}
