//! Library crate for the cBioPortal web API documentation service, exposing modules for binaries
//! and integration tests.

pub mod config;
/// Response payloads.
pub mod dto;
mod error;
/// HTTP routes and the handler registry.
pub mod routes;
/// Documentation generation and health services.
pub mod services;
pub mod state;

pub use error::{AppError, ConfigError};
