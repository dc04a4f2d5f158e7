use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{FormSubmission, OutgoingEmail, Sender},
    ports::{inbound::NotificationService, outbound::Mailer},
    DispatchError, Interpolation, TemplateTable,
};

const NOT_PROVIDED: &str = "N/A";

/// Addresses and rendering options for outgoing notification mail.
#[derive(Debug, Clone)]
pub struct NotificationSettings {
    pub from_email: String,
    pub sender_name: String,
    pub admin_sender_name: String,
    pub admin_email: String,
    pub interpolation: Interpolation,
}

pub struct NotificationServiceImpl<M> {
    mailer: Arc<M>,
    templates: Arc<TemplateTable>,
    settings: NotificationSettings,
}

impl<M> NotificationServiceImpl<M> {
    pub fn new(mailer: Arc<M>, templates: Arc<TemplateTable>, settings: NotificationSettings) -> Self {
        Self {
            mailer,
            templates,
            settings,
        }
    }

    /// Reply to the submitter, rendered from the form's template.
    fn submitter_email(&self, submission: &FormSubmission) -> OutgoingEmail {
        let form_name = submission.form_name();
        let template = self.templates.select_template(
            form_name.as_deref(),
            submission,
            self.settings.interpolation,
        );

        OutgoingEmail {
            to: submission.email().unwrap_or_default(),
            from: Sender {
                email: self.settings.from_email.clone(),
                name: self.settings.sender_name.clone(),
            },
            subject: template.subject,
            text: template.text,
            html: template.html,
        }
    }

    /// Summary of the submission for the team inbox.
    fn admin_email(&self, submission: &FormSubmission) -> OutgoingEmail {
        let form_name = submission.form_name().unwrap_or_default();
        let name = submission.name().unwrap_or_default();
        let email = submission.email().unwrap_or_default();
        let phone = submission.phone().unwrap_or_else(|| NOT_PROVIDED.into());
        let company = submission.company().unwrap_or_else(|| NOT_PROVIDED.into());

        let text = format!(
            "New form submission:\n\nForm: {form_name}\nName: {name}\nEmail: {email}\nPhone: {phone}\nCompany: {company}"
        );

        let escape = |value: &str| self.settings.interpolation.html(value).into_owned();
        let rows = [
            ("Form", escape(&form_name)),
            ("Name", escape(&name)),
            ("Email", escape(&email)),
            ("Phone", escape(&phone)),
            ("Company", escape(&company)),
        ]
        .iter()
        .map(|(label, value)| {
            format!("    <tr><td><strong>{label}:</strong></td><td>{value}</td></tr>\n")
        })
        .collect::<String>();
        let html = format!(
            "<h2>New Form Submission</h2>\n<table style=\"width: 100%; max-width: 600px;\">\n{rows}</table>\n"
        );

        OutgoingEmail {
            to: self.settings.admin_email.clone(),
            from: Sender {
                email: self.settings.from_email.clone(),
                name: self.settings.admin_sender_name.clone(),
            },
            subject: format!("New {form_name} submission from {name}"),
            text,
            html,
        }
    }
}

#[async_trait]
impl<M: Mailer> NotificationService for NotificationServiceImpl<M> {
    async fn dispatch(&self, submission: &FormSubmission) -> Result<(), DispatchError> {
        let to_submitter = self.submitter_email(submission);
        let to_admin = self.admin_email(submission);

        // Both sends run to completion even if one of them fails.
        let (submitter_result, admin_result) = futures::future::join(
            self.mailer.send(&to_submitter),
            self.mailer.send(&to_admin),
        )
        .await;

        submitter_result.and(admin_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::outbound::RecordingMailer;

    fn settings() -> NotificationSettings {
        NotificationSettings {
            from_email: "noreply@perfectaimarketing.com".to_string(),
            sender_name: "Perfect AIm Marketing".to_string(),
            admin_sender_name: "Perfect AIm Forms".to_string(),
            admin_email: "team@perfectaimarketing.com".to_string(),
            interpolation: Interpolation::Raw,
        }
    }

    fn service(mailer: RecordingMailer) -> NotificationServiceImpl<RecordingMailer> {
        NotificationServiceImpl::new(
            Arc::new(mailer),
            Arc::new(TemplateTable::builtin()),
            settings(),
        )
    }

    fn submission(fields: &[(&str, &str)]) -> FormSubmission {
        fields.iter().copied().collect()
    }

    #[tokio::test]
    async fn dispatch_sends_to_submitter_and_admin() {
        let mailer = RecordingMailer::new();
        let service = service(mailer.clone());

        service
            .dispatch(&submission(&[
                ("name", "Alice"),
                ("email", "a@x.com"),
                ("form_name", "medcor-contact"),
            ]))
            .await
            .unwrap();

        assert_eq!(mailer.call_count(), 2);
        let sent = mailer.sent();
        let to_submitter = sent.iter().find(|m| m.to == "a@x.com").unwrap();
        assert_eq!(to_submitter.subject, "Thank You for Contacting MedCor AI");
        assert_eq!(to_submitter.from.name, "Perfect AIm Marketing");

        let to_admin = sent
            .iter()
            .find(|m| m.to == "team@perfectaimarketing.com")
            .unwrap();
        assert_eq!(to_admin.subject, "New medcor-contact submission from Alice");
        assert_eq!(to_admin.from.name, "Perfect AIm Forms");
        assert_eq!(to_admin.from.email, "noreply@perfectaimarketing.com");
    }

    #[test]
    fn admin_summary_uses_placeholder_for_missing_phone_and_company() {
        let service = service(RecordingMailer::new());

        let email = service.admin_email(&submission(&[
            ("name", "Bob"),
            ("email", "b@x.com"),
            ("form_name", "contact"),
            ("phone", ""),
        ]));

        assert_eq!(
            email.text,
            "New form submission:\n\nForm: contact\nName: Bob\nEmail: b@x.com\nPhone: N/A\nCompany: N/A"
        );
        assert!(email
            .html
            .contains("<tr><td><strong>Phone:</strong></td><td>N/A</td></tr>"));
        assert!(email
            .html
            .contains("<tr><td><strong>Company:</strong></td><td>N/A</td></tr>"));
    }

    #[test]
    fn admin_summary_includes_provided_phone_and_company() {
        let service = service(RecordingMailer::new());

        let email = service.admin_email(&submission(&[
            ("name", "Bob"),
            ("phone", "555-0100"),
            ("company", "Acme"),
        ]));

        assert!(email.text.contains("Phone: 555-0100\nCompany: Acme"));
        assert!(email.html.contains("<td>Acme</td>"));
    }

    #[test]
    fn escaping_applies_to_admin_html_only() {
        let mut settings = settings();
        settings.interpolation = Interpolation::EscapeHtml;
        let service = NotificationServiceImpl::new(
            Arc::new(RecordingMailer::new()),
            Arc::new(TemplateTable::builtin()),
            settings,
        );

        let email = service.admin_email(&submission(&[("name", "<i>Eve</i>")]));

        assert!(email.text.contains("Name: <i>Eve</i>"));
        assert!(!email.html.contains("<i>Eve</i>"));
    }

    #[tokio::test]
    async fn failed_send_is_reported_after_both_attempts() {
        let mailer = RecordingMailer::failing("provider down");
        let service = service(mailer.clone());

        let err = service
            .dispatch(&submission(&[("name", "Carl"), ("email", "c@x.com")]))
            .await
            .unwrap_err();

        assert_eq!(mailer.call_count(), 2);
        assert!(matches!(err, DispatchError::Delivery(ref msg) if msg == "provider down"));
    }
}
