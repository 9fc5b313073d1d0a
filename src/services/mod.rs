/// Static API metadata.
pub mod api_info;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
