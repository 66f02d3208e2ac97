use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::biometrics::{count_all, fetch_unordered};
use crate::errors::ApiError;
use crate::models::biometrics::{InspectionReport, SampleDocument};

const SAMPLE_SIZE: i64 = 5;

/// Diagnostic view of the collection: a handful of documents with
/// their field sets, plus a total count. The count is a full scan,
/// which is fine only while the collection stays small.
#[tracing::instrument(name = "Inspect biometric collection", skip(pool))]
pub async fn inspect_collection(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let sampled = fetch_unordered(pool.get_ref(), SAMPLE_SIZE).await?;

    let sample_documents: Vec<SampleDocument> = sampled
        .iter()
        .map(|(id, doc)| SampleDocument::from_document(*id, doc))
        .collect();

    let total = count_all(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(InspectionReport {
        total_documents_checked: sample_documents.len(),
        sample_documents,
        total_documents_in_collection: total,
    }))
}
