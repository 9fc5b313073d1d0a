use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok" once the server accepts requests.
    pub status: String,
    /// Number of paths listed in the documentation descriptor.
    pub documented_paths: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(documented_paths: usize) -> Self {
        Self {
            status: "ok".to_string(),
            documented_paths,
        }
    }
}
