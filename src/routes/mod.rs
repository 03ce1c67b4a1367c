use std::any::Any;

use axum::{
    Router,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::{catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer};

use crate::{
    error::AppError,
    middleware::limit::{BODY_LIMIT, render_payload_too_large},
    state::AppState,
};

pub mod characters;
pub mod doc;
pub mod favorites;
pub mod health;
pub mod planets;
pub mod sitemap;
pub mod users;
pub mod vehicles;

// Build the API router without binding state; it will be provided by `create_app`.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(planets::router())
        .merge(characters::router())
        .merge(vehicles::router())
        .merge(favorites::router())
}

/// The complete application: sitemap, API, docs and JSON fallbacks.
pub fn create_app(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs());

    with_error_handling(routes).with_state(state)
}

/// Wraps `routes` so that unknown paths, wrong methods, oversized bodies and panics all
/// answer with a JSON `{"message"}` body. Call it after every route has been added.
pub fn with_error_handling(routes: Router<AppState>) -> Router<AppState> {
    routes
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(axum::middleware::map_response(render_payload_too_large))
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("Method {method} not allowed on {}", uri.path()))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
