use std::sync::Arc;

use axum::{body::to_bytes, response::Response, Router};
use serde_json::Value;

use crate::{
    app_state::AppState,
    config::ApplicationSettings,
    domain::{
        ports::outbound::{RecordingConsentStore, RecordingMailer},
        services::{ConsentServiceImpl, NotificationServiceImpl, NotificationSettings},
        Interpolation, TemplateTable,
    },
    router,
};

/// The full router wired to recording doubles instead of SendGrid and the
/// spreadsheet.
pub(crate) struct TestApp {
    pub mailer: RecordingMailer,
    pub store: RecordingConsentStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(RecordingMailer::new(), RecordingConsentStore::new())
    }

    pub fn with_failing_mailer(message: &str) -> Self {
        Self::with(RecordingMailer::failing(message), RecordingConsentStore::new())
    }

    pub fn with_failing_store(message: &str) -> Self {
        Self::with(RecordingMailer::new(), RecordingConsentStore::failing(message))
    }

    fn with(mailer: RecordingMailer, store: RecordingConsentStore) -> Self {
        Self { mailer, store }
    }

    pub fn router(&self) -> Router {
        let notifications = NotificationServiceImpl::new(
            Arc::new(self.mailer.clone()),
            Arc::new(TemplateTable::builtin()),
            NotificationSettings {
                from_email: "noreply@perfectaimarketing.com".to_string(),
                sender_name: "Perfect AIm Marketing".to_string(),
                admin_sender_name: "Perfect AIm Forms".to_string(),
                admin_email: "team@perfectaimarketing.com".to_string(),
                interpolation: Interpolation::Raw,
            },
        );
        let consent = ConsentServiceImpl::new(Arc::new(self.store.clone()));
        let state = AppState::new(Arc::new(notifications), Arc::new(consent));

        router::create(
            state,
            &ApplicationSettings {
                port: 0,
                host: "127.0.0.1".to_string(),
                allowed_origins: Vec::new(),
            },
        )
    }
}

pub(crate) async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
