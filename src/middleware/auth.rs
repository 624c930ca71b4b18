use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::{self, Claims};
use crate::error::ApiError;

/// Authenticated caller extracted from the JWT
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub email: String,
    pub app_name: String,
    pub admin: bool,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
            app_name: claims.app_name,
            admin: claims.admin,
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(&headers).map_err(|msg| {
        tracing::warn!("Rejected {} {}: {}", request.method(), request.uri().path(), msg);
        ApiError::unauthorized(msg)
    })?;

    let claims = auth::validate_jwt(&token).map_err(|e| {
        tracing::warn!("Rejected {} {}: {}", request.method(), request.uri().path(), e);
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Read the token from `Authorization`, either raw or as `Bearer <token>`
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    // A bare "Bearer" scheme with nothing after it is an empty token
    let trimmed = auth_str.trim();
    let token = match trimmed.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => trimmed,
    };
    if token.is_empty() {
        return Err("Empty JWT token".to_string());
    }

    Ok(token.to_string())
}
