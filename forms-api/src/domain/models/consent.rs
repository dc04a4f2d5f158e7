use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

use super::FieldMap;

/// Envelope the form host posts to outgoing webhooks.
#[derive(Debug, Deserialize)]
pub struct SubmissionEnvelope {
    pub payload: SubmissionPayload,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionPayload {
    pub data: FieldMap,
}

/// Metadata about the inbound request that ends up in the consent record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMeta {
    /// Raw `X-Forwarded-For` value, passed through unparsed.
    pub forwarded_for: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ConsentFlag {
    #[serde(rename = "YES")]
    #[strum(serialize = "YES")]
    Yes,
    #[serde(rename = "NO")]
    #[strum(serialize = "NO")]
    No,
}

impl From<bool> for ConsentFlag {
    fn from(checked: bool) -> Self {
        if checked {
            Self::Yes
        } else {
            Self::No
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConsentStatus {
    Active,
}

pub const UNKNOWN_IP: &str = "unknown";

/// One row of the consent sheet.
///
/// Field names are the sheet's column names; renaming a field here renames
/// the column the storage script writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsentRecord {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub consent_appts: ConsentFlag,
    pub consent_marketing: ConsentFlag,
    #[serde(serialize_with = "iso_millis::serialize")]
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub status: ConsentStatus,
}

impl ConsentRecord {
    /// Builds a record from raw form fields, stamped with the current time.
    pub fn normalize(fields: &FieldMap, meta: &RequestMeta) -> Self {
        Self::normalize_at(fields, meta, Utc::now())
    }

    pub fn normalize_at(fields: &FieldMap, meta: &RequestMeta, now: DateTime<Utc>) -> Self {
        Self {
            email: fields.text_or("email", ""),
            phone: fields.text_or("phone", ""),
            first_name: fields.text_or("first_name", ""),
            last_name: fields.text_or("last_name", ""),
            consent_appts: fields.is_checked("consent_appointments").into(),
            consent_marketing: fields.is_checked("consent_promotional").into(),
            timestamp: now,
            ip_address: meta
                .forwarded_for
                .clone()
                .filter(|ip| !ip.is_empty())
                .unwrap_or_else(|| UNKNOWN_IP.to_string()),
            status: ConsentStatus::Active,
        }
    }
}

/// `YYYY-MM-DDTHH:MM:SS.sssZ`, the format the sheet already holds.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
