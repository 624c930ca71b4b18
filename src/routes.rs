use axum::{
    extract::{DefaultBodyLimit, Extension},
    handler::Handler,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config;
use crate::database::models::{County, District, School};
use crate::handlers::{self, elevated, public};
use crate::middleware::{jwt_auth_middleware, require_admin_middleware, DbPool};

/// Full application router with every route and global layer attached
pub fn app(pool: PgPool) -> Router {
    let config = config::config();

    let mut router = Router::new()
        // Public
        .route("/", get(public::index))
        .route("/health", get(public::health))
        .merge(auth_routes())
        .merge(read_routes())
        // Admin only
        .merge(write_routes())
        .fallback(handlers::not_found)
        // Global middleware
        .layer(Extension(DbPool(pool)))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn auth_routes() -> Router {
    Router::new().route("/api/v1/authentication", post(public::authenticate))
}

fn read_routes() -> Router {
    use public::records::{list, show};

    Router::new()
        .route("/api/v1/counties", get(list::<County>))
        .route("/api/v1/counties/:id", get(show::<County>))
        .route("/api/v1/districts", get(list::<District>))
        .route("/api/v1/districts/:id", get(show::<District>))
        .route("/api/v1/schools", get(list::<School>))
        .route("/api/v1/schools/:id", get(show::<School>))
}

/// Auth layers wrap the POST handlers only, so other methods on these
/// paths still fall through to 405.
fn write_routes() -> Router {
    // Last layer added runs first: authenticate, then check the admin flag
    let create_district = elevated::create_district
        .layer(middleware::from_fn(require_admin_middleware))
        .layer(middleware::from_fn(jwt_auth_middleware));
    let create_school = elevated::create_school
        .layer(middleware::from_fn(require_admin_middleware))
        .layer(middleware::from_fn(jwt_auth_middleware));

    Router::new()
        .route("/api/v1/districts", post(create_district))
        .route("/api/v1/schools", post(create_school))
}

/// Permissive when no origins are configured, otherwise an explicit allow-list
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
