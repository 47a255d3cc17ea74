use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use holedns_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::Config(_) | DomainError::Protocol(_) => StatusCode::BAD_REQUEST,
            DomainError::SourceFetch { .. } => StatusCode::BAD_GATEWAY,
            DomainError::Resolve(_) => StatusCode::GATEWAY_TIMEOUT,
            DomainError::Bind { .. } | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
