use tracing::debug;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a static health payload along with the size of the published documentation.
pub fn health_status(state: &SharedState) -> HealthResponse {
    let documented_paths = state.documented_paths();
    debug!(documented_paths, "health check");
    HealthResponse::ok(documented_paths)
}
