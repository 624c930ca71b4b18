// HTTP API Error Types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::auth::JwtError;
use crate::database::DatabaseError;

pub type FieldErrors = BTreeMap<String, String>;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    InvalidJson(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 422 Unprocessable Entity (well-formed JSON, unusable content)
    UnprocessableEntity {
        message: String,
        field_errors: FieldErrors,
    },

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::InvalidJson(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg)
            | ApiError::ServiceUnavailable(msg) => msg,
            ApiError::UnprocessableEntity { message, .. } => message,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidJson(_) => "INVALID_JSON",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::UnprocessableEntity { .. } => "UNPROCESSABLE_ENTITY",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "error": true,
            "message": self.message(),
            "code": self.error_code()
        });

        if let ApiError::UnprocessableEntity { field_errors, .. } = self {
            body["field_errors"] = json!(field_errors);
        }

        body
    }
}

impl ApiError {
    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn unprocessable_entity(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        ApiError::UnprocessableEntity {
            message: message.into(),
            field_errors,
        }
    }

    /// 422 for a single offending field
    pub fn invalid_field(field: &str, problem: impl Into<String>) -> Self {
        let mut field_errors = FieldErrors::new();
        field_errors.insert(field.to_string(), problem.into());
        ApiError::unprocessable_entity("Invalid field value", field_errors)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        if err.is_connection_error() {
            tracing::error!("Database unavailable: {}", err);
            return ApiError::service_unavailable("Database temporarily unavailable");
        }

        match err {
            DatabaseError::NotFound(msg) => ApiError::not_found(msg),
            DatabaseError::ForeignKeyViolation(constraint) => {
                tracing::warn!("Rejected insert violating {}", constraint);
                let field = if constraint.contains("county") {
                    "county_id"
                } else if constraint.contains("district") {
                    "district_id"
                } else {
                    "parent_id"
                };
                ApiError::invalid_field(field, "Referenced record does not exist")
            }
            DatabaseError::ConfigMissing(_) | DatabaseError::InvalidDatabaseUrl => {
                tracing::error!("Database misconfigured: {}", err);
                ApiError::service_unavailable("Database temporarily unavailable")
            }
            DatabaseError::Sqlx(sqlx_err) => {
                // Log the real error but return generic message
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::internal_server_error("Database error occurred")
            }
        }
    }
}

impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired | JwtError::Invalid(_) => ApiError::unauthorized(err.to_string()),
            JwtError::InvalidSecret | JwtError::TokenGeneration(_) => {
                tracing::error!("Token signing failed: {}", err);
                ApiError::internal_server_error("Unable to issue token")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => {
                let mut field_errors = FieldErrors::new();
                field_errors.insert("body".to_string(), e.body_text());
                ApiError::unprocessable_entity("Request body has invalid fields", field_errors)
            }
            other => ApiError::invalid_json(other.body_text()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err: ApiError = DatabaseError::NotFound("County 9 not found".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_json()["code"], "NOT_FOUND");
        assert_eq!(err.to_json()["message"], "County 9 not found");
    }

    #[test]
    fn foreign_key_violation_names_the_field() {
        let err: ApiError =
            DatabaseError::ForeignKeyViolation("schools_district_id_fkey".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_json()["field_errors"].get("district_id").is_some());
    }

    #[test]
    fn sql_errors_do_not_leak() {
        let err: ApiError = DatabaseError::Sqlx(sqlx::Error::ColumnNotFound("secret_col".into())).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_json().to_string().contains("secret_col"));
    }

    #[test]
    fn pool_timeouts_are_service_unavailable() {
        let err: ApiError = DatabaseError::Sqlx(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn bad_tokens_are_unauthorized_but_signing_failures_are_not() {
        let err: ApiError = JwtError::Expired.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err: ApiError = JwtError::InvalidSecret.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
