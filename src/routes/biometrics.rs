use actix_web::{get, post, web, HttpResponse};
use serde_json::Value;
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::handlers::biometrics::filtered_records::filtered_records;
use crate::handlers::biometrics::ingest_record::ingest_record;
use crate::handlers::biometrics::raw_records::raw_records;
use crate::handlers::biometrics::recent_records::recent_records;
use crate::models::biometrics::FilteredQuery;

#[post("/heartrate")]
async fn ingest(
    body: web::Json<Value>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    ingest_record(body, pool).await
}

#[get("/heartrate")]
async fn recent(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    recent_records(pool).await
}

#[get("/heartrate/raw")]
async fn raw(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    raw_records(pool).await
}

#[get("/heartrate/filtered")]
async fn filtered(
    pool: web::Data<PgPool>,
    query: web::Query<FilteredQuery>,
) -> Result<HttpResponse, ApiError> {
    filtered_records(pool, query).await
}
