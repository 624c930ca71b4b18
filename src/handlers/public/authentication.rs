use axum::extract::{rejection::JsonRejection, Json};

use crate::api::AuthenticationPayload;
use crate::auth::{self, Claims};
use crate::middleware::{ApiResponse, ApiResult};

/// POST /api/v1/authentication - issue a signed token for `{email, appName}`
///
/// Responds 201 with the token as a bare JSON string. Addresses in the
/// configured admin domain get a token that unlocks the write routes.
pub async fn authenticate(payload: Result<Json<AuthenticationPayload>, JsonRejection>) -> ApiResult<String> {
    let Json(payload) = payload?;
    let request = payload.validate()?;

    let claims = Claims::new(request.email, request.app_name);
    let token = auth::generate_jwt(&claims)?;

    tracing::info!(
        "Issued {} token for {} ({})",
        if claims.admin { "admin" } else { "read-only" },
        claims.email,
        claims.app_name
    );
    Ok(ApiResponse::created(token))
}
