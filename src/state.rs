//! Immutable application state holding the configuration and the documentation descriptor.

use std::sync::Arc;

use utoipa::openapi::OpenApi;

use crate::{config::AppConfig, services::documentation::RequestHandler};

/// Reference-counted handle to the [`AppState`] shared by every route.
pub type SharedState = Arc<AppState>;

/// Central application state, built once during bootstrap and never mutated afterwards.
pub struct AppState {
    config: AppConfig,
    documentation: OpenApi,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The documentation descriptor is generated here from `handlers`, filtered by the
    /// configured base package.
    pub fn new(config: AppConfig, handlers: &[RequestHandler]) -> SharedState {
        let documentation = config.documentation().build(handlers);
        Arc::new(Self {
            config,
            documentation,
        })
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Documentation descriptor published at the configured docs path.
    pub fn documentation(&self) -> &OpenApi {
        &self.documentation
    }

    /// Number of paths present in the documentation descriptor.
    pub fn documented_paths(&self) -> usize {
        self.documentation.paths.paths.len()
    }
}
