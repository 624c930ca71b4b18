// handlers/mod.rs - two security tiers
//
// Public (no auth) -> Elevated (admin JWT)
//
// The elevated tier only holds handlers; the JWT and admin checks are
// attached as route layers in `routes::write_routes`, so a rejected
// request never reaches a handler or the database.
pub mod elevated;
pub mod public;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for every path no route matches
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
