//! HTTP mapping for dataset errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use xdash_data::DatasetError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A chart request the dataset cannot satisfy.
#[derive(Debug)]
pub struct ApiError(pub DatasetError);

impl From<DatasetError> for ApiError {
    fn from(err: DatasetError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            DatasetError::MissingMetric { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        log::warn!("request rejected ({}): {}", status, self.0);
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
