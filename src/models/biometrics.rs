use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A biometric record is an open-ended JSON object. Clients send
/// whatever fields their device produces (heart rate samples,
/// accelerometer data, blood pressure, notes) and the service passes
/// them through verbatim.
pub type BiometricDocument = Map<String, Value>;

/// Render a moment in time the way records store it: ISO-8601 UTC
/// without an offset suffix, so the strings sort chronologically.
pub fn iso_timestamp(moment: DateTime<Utc>) -> String {
    moment
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Stamp a document at ingestion time: default `timestamp` when the
/// client did not send one, and always overwrite `serverTimestamp`.
pub fn stamp_document(doc: &mut BiometricDocument, ingested_at: DateTime<Utc>) {
    let now_iso = iso_timestamp(ingested_at);
    doc.entry("timestamp".to_string())
        .or_insert_with(|| Value::String(now_iso.clone()));
    doc.insert("serverTimestamp".to_string(), Value::String(now_iso));
}

fn default_hours() -> i64 {
    24
}

fn default_data_type() -> String {
    "heartrate".to_string()
}

#[derive(Debug, Deserialize)]
pub struct FilteredQuery {
    #[serde(default = "default_hours")]
    pub hours: i64,
    #[serde(rename = "type", default = "default_data_type")]
    pub data_type: String,
}

#[derive(Debug, Serialize)]
pub struct FilterApplied {
    pub hours: i64,
    pub data_type: String,
    pub since: String,
}

#[derive(Debug, Serialize)]
pub struct FilteredResponse {
    pub filter_applied: FilterApplied,
    pub results_count: usize,
    pub results: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct RawListingResponse {
    pub count: usize,
    pub documents: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct InspectionReport {
    pub total_documents_checked: usize,
    pub sample_documents: Vec<SampleDocument>,
    pub total_documents_in_collection: i64,
}

/// Structural summary of one stored document: which fields are
/// present, plus the literal values of the fields the dashboards
/// care about (null when absent).
#[derive(Debug, Serialize)]
pub struct SampleDocument {
    pub document_id: Uuid,
    pub fields_present: Vec<String>,
    pub timestamp: Value,
    #[serde(rename = "serverTimestamp")]
    pub server_timestamp: Value,
    #[serde(rename = "dataType")]
    pub data_type: Value,
    #[serde(rename = "heartRate")]
    pub heart_rate: Value,
    #[serde(rename = "heart_rate")]
    pub heart_rate_legacy: Value,
    pub device: Value,
    #[serde(rename = "userId")]
    pub user_id: Value,
}

impl SampleDocument {
    pub fn from_document(document_id: Uuid, doc: &BiometricDocument) -> Self {
        let field = |name: &str| doc.get(name).cloned().unwrap_or(Value::Null);
        SampleDocument {
            document_id,
            fields_present: doc.keys().cloned().collect(),
            timestamp: field("timestamp"),
            server_timestamp: field("serverTimestamp"),
            data_type: field("dataType"),
            heart_rate: field("heartRate"),
            heart_rate_legacy: field("heart_rate"),
            device: field("device"),
            user_id: field("userId"),
        }
    }
}
