use std::sync::Arc;

use sendgrid::SendGridClient;

use crate::{
    adapters::outbound::{SendGridMailer, SheetsConsentStore},
    config::Settings,
    domain::{
        ports::inbound::{ConsentService, NotificationService},
        services::{ConsentServiceImpl, NotificationServiceImpl},
        TemplateTable,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub notifications: Arc<dyn NotificationService>,
    pub consent: Arc<dyn ConsentService>,
}

impl AppState {
    pub fn new(
        notifications: Arc<dyn NotificationService>,
        consent: Arc<dyn ConsentService>,
    ) -> Self {
        Self {
            notifications,
            consent,
        }
    }

    /// Wires the services to SendGrid and the consent spreadsheet.
    pub fn from_settings(settings: &Settings, templates: Arc<TemplateTable>) -> Self {
        if settings.email.api_key.is_empty() {
            tracing::warn!("SENDGRID_API_KEY is not set, outgoing mail will be rejected");
        }

        let client = SendGridClient::with_base_url(
            settings.email.api_key.clone(),
            settings.email.api_base_url.clone(),
        );
        let notifications = NotificationServiceImpl::new(
            Arc::new(SendGridMailer::new(client)),
            templates,
            settings.notification_settings(),
        );

        let store = SheetsConsentStore::new(settings.storage.endpoint_url.clone());
        let consent = ConsentServiceImpl::new(Arc::new(store));

        Self::new(Arc::new(notifications), Arc::new(consent))
    }
}
