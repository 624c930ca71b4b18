use axum::{extract::Request, middleware::Next, response::Response};

use super::auth::AuthUser;
use crate::error::ApiError;

/// Lets the request through only when the JWT carries the admin flag.
/// Must run after `jwt_auth_middleware`.
pub async fn require_admin_middleware(request: Request, next: Next) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| ApiError::unauthorized("JWT authentication required before admin check"))?;

    if !auth_user.admin {
        tracing::warn!(
            "Admin check failed for {} ({}) on {} {}",
            auth_user.email,
            auth_user.app_name,
            request.method(),
            request.uri().path()
        );
        return Err(ApiError::forbidden("You must be an administrator to use this endpoint"));
    }

    tracing::debug!("Admin check passed for {}", auth_user.email);
    Ok(next.run(request).await)
}
