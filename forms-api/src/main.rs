use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app_state::AppState, domain::TemplateTable};

mod adapters;
mod app_state;
mod config;
mod domain;
mod router;
mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forms_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = config::read_config().expect("Failed to read configuration");

    let templates = Arc::new(TemplateTable::builtin());
    let app_state = AppState::from_settings(&settings, templates);
    let app = router::create(app_state, &settings.application);

    let addr = format!(
        "{}:{}",
        settings.application.host, settings.application.port
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.expect("Server error");
}
