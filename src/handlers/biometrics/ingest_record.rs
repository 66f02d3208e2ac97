use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::db::biometrics::insert_document;
use crate::errors::ApiError;
use crate::models::biometrics::stamp_document;

#[tracing::instrument(name = "Ingest biometric record", skip(body, pool))]
pub async fn ingest_record(
    body: web::Json<Value>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let mut doc = match body.into_inner() {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(ApiError::InvalidInput("No JSON body".to_string())),
    };

    stamp_document(&mut doc, Utc::now());

    let document_id = insert_document(pool.get_ref(), &doc).await?;
    tracing::info!(
        "Stored biometric record {} of type {:?}",
        document_id,
        doc.get("dataType")
    );

    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
