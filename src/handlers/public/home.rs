use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use serde_json::json;

use crate::database::DatabaseManager;
use crate::middleware::DbPool;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// GET / - static landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health - liveness plus a database ping
pub async fn health(Extension(DbPool(pool)): Extension<DbPool>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
