use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

/// JSON response with an explicit status. The payload is written as-is,
/// without any envelope, so collections stay bare arrays.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(data: T) -> Self {
        Self::with_status(data, StatusCode::OK)
    }

    pub fn with_status(data: T, status_code: StatusCode) -> Self {
        Self { data, status_code }
    }

    /// Create a 201 Created response
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_value(&self.data) {
            Ok(value) => (self.status_code, Json(value)).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": true,
                        "message": "Failed to serialize response data",
                        "code": "INTERNAL_SERVER_ERROR"
                    })),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
