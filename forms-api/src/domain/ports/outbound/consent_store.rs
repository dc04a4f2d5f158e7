use async_trait::async_trait;

use crate::domain::{models::ConsentRecord, ConsentError};

/// External storage holding one row per consent record.
#[async_trait]
pub trait ConsentStore: Send + Sync + 'static {
    async fn forward(&self, record: &ConsentRecord) -> Result<(), ConsentError>;
}
