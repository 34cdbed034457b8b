use crate::wire::WireError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_types::CoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("The request body is empty")]
    EmptyBody,
    #[error("The request body is not valid JSON: {0}")]
    MalformedJson(String),
    #[error("{0}")]
    MissingPeriod(#[from] CoreError),
    #[error("Amount '{0}' exceeds the supported magnitude of 10^18")]
    AmountOutOfRange(String),
    #[error("{0}")]
    UnknownAnalysis(#[from] analytics::AnalyticsError),
}

impl From<WireError> for AppError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::EmptyBody => AppError::EmptyBody,
            WireError::MalformedJson(message) => AppError::MalformedJson(message),
            WireError::MissingPeriod(core_err) => AppError::MissingPeriod(core_err),
            WireError::AmountOutOfRange { field } => AppError::AmountOutOfRange(field),
        }
    }
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Every variant is a client input problem; degenerate figures are never
/// errors, they resolve to zero inside the engine.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::EmptyBody
            | AppError::MalformedJson(_)
            | AppError::MissingPeriod(_)
            | AppError::AmountOutOfRange(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownAnalysis(_) => StatusCode::NOT_FOUND,
        };
        tracing::warn!(error = %self, status = status.as_u16(), "Rejected analysis request.");

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
