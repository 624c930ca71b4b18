pub mod auth;
pub mod require_admin;
pub mod response;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use require_admin::require_admin_middleware;
pub use response::{ApiResponse, ApiResult};

/// Database pool shared with handlers through request extensions
#[derive(Clone)]
pub struct DbPool(pub sqlx::PgPool);
