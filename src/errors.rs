use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::json;

/// Every handler failure is one of these two kinds. Storage failures
/// echo the underlying database message to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Storage(#[from] sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}

/// Rewrite body extractor failures into the API's error shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Rejected request body: {}", err);
    let response = HttpResponse::BadRequest().json(json!({
        "error": "No JSON body"
    }));
    InternalError::from_response(err, response).into()
}

/// Rewrite query string extractor failures (e.g. non-integer `hours`)
/// into the API's error shape.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!("Rejected query string: {}", err);
    let response = HttpResponse::BadRequest().json(json!({
        "error": err.to_string()
    }));
    InternalError::from_response(err, response).into()
}
