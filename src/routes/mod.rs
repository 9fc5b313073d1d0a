use axum::{Router, http::Uri};

use crate::{error::AppError, services::documentation::RequestHandler, state::SharedState};

pub mod api;
/// Swagger UI and OpenAPI JSON routes.
pub mod docs;
/// Health check route.
pub mod health;

/// Compose all route trees, wiring in shared state and documentation routes.
///
/// Documented handlers are nested under the configured path mapping so the served routes match
/// the paths listed in the descriptor.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = Router::new().nest(state.config().path_mapping(), api::router());

    let docs_router = docs::router(&state);

    health::router()
        .merge(api_router)
        .merge(docs_router)
        .fallback(not_found)
        .with_state(state)
}

/// Every request handler hosted by the service, documented or not.
///
/// Each entry knows whether [`router`] mounts it below the path mapping, so
/// [`RequestHandler::served_path`] matches the route actually served.
pub fn handlers() -> Vec<RequestHandler> {
    let mut handlers = health::handlers();
    handlers.extend(api::handlers());
    handlers
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {uri}"))
}
