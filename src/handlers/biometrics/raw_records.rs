use actix_web::{web, HttpResponse};
use serde_json::Value;
use sqlx::PgPool;

use crate::db::biometrics::fetch_unordered;
use crate::errors::ApiError;
use crate::models::biometrics::RawListingResponse;

const RAW_LIMIT: i64 = 10;

/// Key under which each raw document carries its storage identifier.
pub const DOCUMENT_ID_KEY: &str = "_document_id";

/// Raw listing for debugging: store-native order, documents verbatim
/// except for the annotated storage id.
#[tracing::instrument(name = "List raw biometric documents", skip(pool))]
pub async fn raw_records(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let documents = fetch_unordered(pool.get_ref(), RAW_LIMIT).await?;

    let documents: Vec<Value> = documents
        .into_iter()
        .map(|(id, mut doc)| {
            doc.insert(DOCUMENT_ID_KEY.to_string(), Value::String(id.to_string()));
            Value::Object(doc)
        })
        .collect();

    Ok(HttpResponse::Ok().json(RawListingResponse {
        count: documents.len(),
        documents,
    }))
}
