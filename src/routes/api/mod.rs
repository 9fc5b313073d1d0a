//! Handlers published in the documentation descriptor.
//!
//! Everything defined under this module is mounted below the configured path mapping and is
//! selected by the default base package filter.

use axum::Router;

use crate::{services::documentation::RequestHandler, state::SharedState};

/// Service metadata route.
pub mod info;

/// Namespace of the documented handlers, used as the default base package.
pub const NAMESPACE: &str = module_path!();

/// Configure the documented routes subtree, relative to the path mapping.
pub fn router() -> Router<SharedState> {
    info::router()
}

/// Request handlers defined in this namespace, all mounted below the path mapping.
pub fn handlers() -> Vec<RequestHandler> {
    info::handlers()
}
