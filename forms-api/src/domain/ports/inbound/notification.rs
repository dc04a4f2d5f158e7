use async_trait::async_trait;

use crate::domain::{models::FormSubmission, DispatchError};

#[async_trait]
pub trait NotificationService: Send + Sync + 'static {
    /// Sends the submitter's confirmation and the team notification.
    async fn dispatch(&self, submission: &FormSubmission) -> Result<(), DispatchError>;
}
