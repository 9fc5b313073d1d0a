//! Application-level configuration loading: listen port, documented namespace and doc routes.

use std::{
    env,
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};
use validator::{Validate, ValidationError};

use crate::{
    error::ConfigError,
    routes,
    services::documentation::{DEFAULT_PATH_MAPPING, DocumentationConfig},
};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "CBIOPORTAL_API_CONFIG_PATH";
/// Route serving the OpenAPI JSON document.
const DEFAULT_DOCS_PATH: &str = "/api-docs";
/// Route serving the Swagger UI.
const DEFAULT_SWAGGER_UI_PATH: &str = "/swagger-ui";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    base_package: String,
    path_mapping: String,
    docs_path: String,
    swagger_ui_path: String,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        Self::load_from(&resolve_config_path())
    }

    /// Load the configuration stored at `path`.
    ///
    /// A missing, unreadable, malformed or invalid file yields [`AppConfig::default`].
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(app_config) => {
                    info!(
                        path = %path.display(),
                        base_package = %app_config.base_package,
                        "loaded config"
                    );
                    app_config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to load config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %ConfigError::from(err),
                    "falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse and validate a JSON configuration document. Absent keys keep their defaults.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let raw = serde_json::from_str::<RawConfig>(contents)?;
        raw.validate()?;
        Ok(raw.into())
    }

    /// Settings for the documentation generator.
    pub fn documentation(&self) -> DocumentationConfig {
        DocumentationConfig::new(self.base_package.as_str())
            .with_path_mapping(self.path_mapping.as_str())
    }

    /// Prefix under which the documented handlers are mounted.
    pub fn path_mapping(&self) -> &str {
        &self.path_mapping
    }

    /// Route serving the OpenAPI JSON document.
    pub fn docs_path(&self) -> &str {
        &self.docs_path
    }

    /// Route serving the Swagger UI.
    pub fn swagger_ui_path(&self) -> &str {
        &self.swagger_ui_path
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_package: routes::api::NAMESPACE.to_string(),
            path_mapping: DEFAULT_PATH_MAPPING.to_string(),
            docs_path: DEFAULT_DOCS_PATH.to_string(),
            swagger_ui_path: DEFAULT_SWAGGER_UI_PATH.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_route_layout"))]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[validate(length(min = 1))]
    base_package: Option<String>,
    #[validate(custom(function = "validate_route_path"))]
    path_mapping: Option<String>,
    #[validate(custom(function = "validate_route_path"))]
    docs_path: Option<String>,
    #[validate(custom(function = "validate_route_path"))]
    swagger_ui_path: Option<String>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            base_package: value.base_package.unwrap_or(defaults.base_package),
            path_mapping: value.path_mapping.unwrap_or(defaults.path_mapping),
            docs_path: value.docs_path.unwrap_or(defaults.docs_path),
            swagger_ui_path: value.swagger_ui_path.unwrap_or(defaults.swagger_ui_path),
        }
    }
}

/// Validates that a route path is absolute, not the bare root and has no trailing slash.
fn validate_route_path(path: &str) -> Result<(), ValidationError> {
    if !path.starts_with('/') || path.len() < 2 || path.ends_with('/') {
        let mut err = ValidationError::new("route_path_format");
        err.message = Some(
            format!("route path must start with '/' and not end with '/' (got {path:?})").into(),
        );
        return Err(err);
    }

    Ok(())
}

/// Rejects documentation routes that would overlap each other or a hosted route.
///
/// Overlapping routes make the router panic while it is assembled, so such a file must fall
/// back to the defaults instead.
fn validate_route_layout(raw: &RawConfig) -> Result<(), ValidationError> {
    let path_mapping = raw.path_mapping.as_deref().unwrap_or(DEFAULT_PATH_MAPPING);
    let docs_path = raw.docs_path.as_deref().unwrap_or(DEFAULT_DOCS_PATH);
    let swagger_ui_path = raw
        .swagger_ui_path
        .as_deref()
        .unwrap_or(DEFAULT_SWAGGER_UI_PATH);

    if docs_path == swagger_ui_path {
        return Err(route_collision(docs_path, "the Swagger UI"));
    }
    if is_within(path_mapping, swagger_ui_path) {
        return Err(route_collision(path_mapping, "the Swagger UI"));
    }

    let hosted = routes::handlers()
        .iter()
        .map(|handler| handler.served_path(path_mapping))
        .collect::<Vec<_>>();
    for path in [docs_path, swagger_ui_path] {
        if is_within(path, path_mapping) {
            return Err(route_collision(path, "the path mapping"));
        }
        if hosted.iter().any(|route| route == path) {
            return Err(route_collision(path, "a hosted route"));
        }
    }

    Ok(())
}

/// Whether `path` is `prefix` itself or a route below it.
fn is_within(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

fn route_collision(path: &str, other: &str) -> ValidationError {
    let mut err = ValidationError::new("route_collision");
    err.message = Some(format!("route {path:?} overlaps {other}").into());
    err
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    config_path_from(env::var_os(CONFIG_PATH_ENV))
}

fn config_path_from(value: Option<OsString>) -> PathBuf {
    value
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Resolve the listen port from `PORT`, then `SERVER_PORT`, defaulting to 8080.
pub fn listen_port() -> u16 {
    port_from(env::var("PORT").ok(), env::var("SERVER_PORT").ok())
}

fn port_from(port: Option<String>, server_port: Option<String>) -> u16 {
    port.or(server_port)
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_keeps_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.path_mapping(), "/api");
        assert_eq!(config.docs_path(), "/api-docs");
        assert_eq!(config.swagger_ui_path(), "/swagger-ui");
    }

    #[test]
    fn default_base_package_is_the_api_routes() {
        let config = AppConfig::default();
        assert_eq!(
            config.documentation().base_package(),
            "cbioportal_api_docs::routes::api"
        );
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_json(
            r#"{"base_package": "portal::web::api", "path_mapping": "/v2", "docs_path": "/v2-api-docs"}"#,
        )
        .unwrap();

        let documentation = config.documentation();
        assert_eq!(documentation.base_package(), "portal::web::api");
        assert_eq!(documentation.path_mapping(), "/v2");
        assert_eq!(config.docs_path(), "/v2-api-docs");
        assert_eq!(config.swagger_ui_path(), "/swagger-ui");
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            AppConfig::from_json(r#"{"base_package": ""}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"path_mapping": "api"}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"docs_path": "/"}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"swagger_ui_path": "/docs/"}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_documents_are_parse_errors() {
        assert!(matches!(
            AppConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"colors": []}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn colliding_routes_are_rejected() {
        for document in [
            r#"{"docs_path": "/healthcheck"}"#,
            r#"{"swagger_ui_path": "/healthcheck"}"#,
            r#"{"docs_path": "/swagger-ui"}"#,
            r#"{"docs_path": "/docs", "swagger_ui_path": "/docs"}"#,
            r#"{"docs_path": "/api/info"}"#,
            r#"{"docs_path": "/api"}"#,
            r#"{"swagger_ui_path": "/api"}"#,
            r#"{"path_mapping": "/swagger-ui/v2"}"#,
            r#"{"path_mapping": "/v2", "docs_path": "/v2/info"}"#,
        ] {
            assert!(
                matches!(AppConfig::from_json(document), Err(ConfigError::Invalid(_))),
                "{document} should be rejected"
            );
        }
    }

    #[test]
    fn routes_freed_by_a_new_path_mapping_are_accepted() {
        let config =
            AppConfig::from_json(r#"{"path_mapping": "/v2", "docs_path": "/api/info"}"#).unwrap();
        assert_eq!(config.docs_path(), "/api/info");

        let config = AppConfig::from_json(r#"{"docs_path": "/apidocs"}"#).unwrap();
        assert_eq!(config.docs_path(), "/apidocs");
    }

    #[test]
    fn load_from_reads_a_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        fs::write(&path, r#"{"path_mapping": "/v2"}"#).unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.path_mapping(), "/v2");
    }

    #[test]
    fn load_from_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert_eq!(AppConfig::load_from(&missing), AppConfig::default());

        let malformed = dir.path().join("malformed.json");
        fs::write(&malformed, "{ not json").unwrap();
        assert_eq!(AppConfig::load_from(&malformed), AppConfig::default());

        let invalid = dir.path().join("invalid.json");
        fs::write(&invalid, r#"{"docs_path": "/healthcheck"}"#).unwrap();
        assert_eq!(AppConfig::load_from(&invalid), AppConfig::default());

        // a directory cannot be read as a file
        assert_eq!(AppConfig::load_from(dir.path()), AppConfig::default());
    }

    #[test]
    fn config_path_honours_non_empty_override() {
        assert_eq!(config_path_from(None), PathBuf::from("config/app.json"));
        assert_eq!(
            config_path_from(Some(OsString::new())),
            PathBuf::from("config/app.json")
        );
        assert_eq!(
            config_path_from(Some("/etc/portal.json".into())),
            PathBuf::from("/etc/portal.json")
        );
    }

    #[test]
    fn port_prefers_port_then_server_port() {
        assert_eq!(port_from(None, None), 8080);
        assert_eq!(port_from(Some("9000".into()), Some("9001".into())), 9000);
        assert_eq!(port_from(None, Some("9001".into())), 9001);
        assert_eq!(port_from(Some("not-a-port".into()), Some("9001".into())), 8080);
    }
}
