//! HTTP route handlers.
//!
//! The home route carries a Cache-Control header since its body never changes;
//! the health probe is never cached. Unknown paths fall through to a 404 and
//! unsupported methods to a 405, both with the short error Cache-Control.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{
    http::{
        header::{HeaderValue, CACHE_CONTROL},
        Method, Uri,
    },
    middleware,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HOME;
use crate::error::AppError;
use crate::middleware::request_id_layer;

/// Fallback for paths with no route.
async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(uri.path().to_owned())
}

/// Fallback for known paths hit with a method they do not serve.
async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = %uri.path(), "Method not allowed");
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router() -> Router {
    // The method fallback sets its own Cache-Control, so the home header
    // below only lands on the greeting itself
    let home_routes = Router::new()
        .route("/", get(home::index).fallback(method_not_allowed))
        .layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route(
        "/health",
        get(health::health).fallback(method_not_allowed),
    );

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
