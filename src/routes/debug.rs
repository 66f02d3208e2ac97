use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::handlers::biometrics::inspect_collection::inspect_collection;

#[get("/debug")]
async fn debug_collection(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    inspect_collection(pool).await
}
