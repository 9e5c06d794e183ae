use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::{debug, error};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was missing or empty.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("internal store failure: {0}")]
    Internal(String),
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            StoreError::Internal(detail) => {
                error!("Store failure: {}", detail);
                "Server error".to_string()
            }
            other => other.to_string(),
        };
        failure(self.status_code(), message)
    }
}

/// The `{success: false, error}` envelope every failed request returns.
pub fn failure(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "success": false,
        "error": message.into(),
    }))
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected body for {}: {}", req.path(), err);
    let response = failure(StatusCode::BAD_REQUEST, format!("Invalid request body: {}", err));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected query for {}: {}", req.path(), err);
    let response = failure(StatusCode::BAD_REQUEST, format!("Invalid query string: {}", err));
    InternalError::from_response(err, response).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected path {}: {}", req.path(), err);
    let response = failure(StatusCode::BAD_REQUEST, format!("Invalid path: {}", err));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn internal_errors_hide_their_detail() {
        let err = StoreError::Internal("poisoned lock".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "success": false, "error": "Server error" }));
    }

    #[actix_web::test]
    async fn client_errors_keep_their_message() {
        let err = StoreError::NotFound("Task not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Task not found");
        assert_eq!(StoreError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
    }
}
