use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use sqlx::PgPool;

use crate::db::biometrics::fetch_filtered;
use crate::errors::ApiError;
use crate::models::biometrics::{iso_timestamp, FilterApplied, FilteredQuery, FilteredResponse};

#[tracing::instrument(
    name = "List filtered biometric records",
    skip(pool, query),
    fields(hours = query.hours, data_type = %query.data_type)
)]
pub async fn filtered_records(
    pool: web::Data<PgPool>,
    query: web::Query<FilteredQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let window = Duration::try_hours(query.hours)
        .ok_or_else(|| ApiError::InvalidInput(format!("hours value {} is out of range", query.hours)))?;
    let since = iso_timestamp(Utc::now() - window);

    let results = fetch_filtered(pool.get_ref(), &query.data_type, &since).await?;
    tracing::info!(
        "Filtered query matched {} records since {}",
        results.len(),
        since
    );

    Ok(HttpResponse::Ok().json(FilteredResponse {
        filter_applied: FilterApplied {
            hours: query.hours,
            data_type: query.data_type,
            since,
        },
        results_count: results.len(),
        results,
    }))
}
