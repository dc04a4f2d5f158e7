use async_trait::async_trait;
use sendgrid::{Address, Mail, SendGridClient};

use crate::domain::{
    models::OutgoingEmail,
    ports::outbound::Mailer,
    DispatchError,
};

/// [`Mailer`] backed by the SendGrid v3 API.
pub struct SendGridMailer {
    client: SendGridClient,
}

impl SendGridMailer {
    pub fn new(client: SendGridClient) -> Self {
        Self { client }
    }
}

impl From<&OutgoingEmail> for Mail {
    fn from(email: &OutgoingEmail) -> Self {
        Mail {
            to: Address::new(email.to.clone()),
            from: Address::named(email.from.email.clone(), email.from.name.clone()),
            subject: email.subject.clone(),
            text: email.text.clone(),
            html: email.html.clone(),
        }
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DispatchError> {
        self.client
            .send(&Mail::from(email))
            .await
            .map_err(|e| DispatchError::delivery(e.to_string()))
    }
}
