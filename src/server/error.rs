use crate::utils::error::{CatalogError, ErrorCategory};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Handler error; the ERP failure text is passed through untouched.
#[derive(Debug)]
pub struct AppError(pub CatalogError);

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0.category() {
            ErrorCategory::Request => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("❌ Proxy request failed: {}", self.0);
        } else {
            tracing::warn!("Rejected request: {}", self.0);
        }

        (status, self.0.to_string()).into_response()
    }
}
