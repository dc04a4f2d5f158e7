use async_trait::async_trait;

use crate::domain::{
    models::{ConsentRecord, FieldMap, RequestMeta},
    ConsentError,
};

#[async_trait]
pub trait ConsentService: Send + Sync + 'static {
    /// Normalizes the submitted fields and forwards the record to storage.
    async fn record(
        &self,
        fields: &FieldMap,
        meta: &RequestMeta,
    ) -> Result<ConsentRecord, ConsentError>;
}
