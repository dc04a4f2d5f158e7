use async_trait::async_trait;

use crate::domain::{models::OutgoingEmail, DispatchError};

#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DispatchError>;
}
