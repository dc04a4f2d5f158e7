//! Recording test doubles for the outbound ports.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use super::{ConsentStore, Mailer};
use crate::domain::{
    models::{ConsentRecord, OutgoingEmail},
    ConsentError, DispatchError,
};

/// Mailer that remembers every message and optionally fails.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    call_count: Arc<AtomicUsize>,
    failure: Option<String>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `send` is recorded and then rejected with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DispatchError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(email.clone());
        match &self.failure {
            Some(message) => Err(DispatchError::delivery(message.clone())),
            None => Ok(()),
        }
    }
}

/// Consent store that keeps forwarded records in memory.
#[derive(Clone, Default)]
pub struct RecordingConsentStore {
    records: Arc<Mutex<Vec<ConsentRecord>>>,
    failure: Option<String>,
}

impl RecordingConsentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<ConsentRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConsentStore for RecordingConsentStore {
    async fn forward(&self, record: &ConsentRecord) -> Result<(), ConsentError> {
        if let Some(message) = &self.failure {
            return Err(ConsentError::forward(message.clone()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
