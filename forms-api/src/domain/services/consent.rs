use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{ConsentRecord, FieldMap, RequestMeta},
    ports::{inbound::ConsentService, outbound::ConsentStore},
    ConsentError,
};

pub struct ConsentServiceImpl<S> {
    store: Arc<S>,
}

impl<S> ConsentServiceImpl<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: ConsentStore> ConsentService for ConsentServiceImpl<S> {
    async fn record(
        &self,
        fields: &FieldMap,
        meta: &RequestMeta,
    ) -> Result<ConsentRecord, ConsentError> {
        let record = ConsentRecord::normalize(fields, meta);
        self.store.forward(&record).await?;

        tracing::info!(
            email = %record.email,
            appointments = %record.consent_appts,
            marketing = %record.consent_marketing,
            "Consent saved"
        );

        Ok(record)
    }
}
