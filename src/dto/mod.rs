/// Service metadata payload.
pub mod api_info;
/// Health check payload.
pub mod health;
