//! Relay API Routes
//!
//! - POST <relay path> - create a Tavus conversation
//! - OPTIONS * - CORS preflight
//! - anything else - 404

pub mod conversation;
mod error;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;
pub use error::ApiError;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the full application router
pub fn app(state: AppState, relay_path: &str) -> Router {
    Router::new()
        .merge(conversation::router(relay_path))
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::map_response(cors_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// OPTIONS is answered on every path, everything else is unknown
async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        conversation::preflight().await.into_response()
    } else {
        conversation::not_found().await.into_response()
    }
}

/// Stamp permissive CORS headers on every response
async fn cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
