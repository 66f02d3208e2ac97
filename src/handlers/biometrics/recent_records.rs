use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::biometrics::fetch_recent;
use crate::errors::ApiError;

const RECENT_LIMIT: i64 = 100;

/// Unfiltered listing: the most recent records regardless of type,
/// newest first. Dashboards do their own filtering on this feed.
#[tracing::instrument(name = "List recent biometric records", skip(pool))]
pub async fn recent_records(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let records = fetch_recent(pool.get_ref(), RECENT_LIMIT).await?;
    tracing::info!("Returning {} recent records", records.len());
    Ok(HttpResponse::Ok().json(records))
}
