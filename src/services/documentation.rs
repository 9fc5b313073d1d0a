//! Documentation descriptor generation restricted to the handlers of one namespace.

use utoipa::{
    ToSchema,
    openapi::{
        ComponentsBuilder, Info, OpenApi, OpenApiBuilder, Paths, RefOr, Schema,
        path::{HttpMethod, Operation},
        tag::{Tag, TagBuilder},
    },
};

use crate::services::api_info::{ApiInfo, CBIOPORTAL_API_INFO};

/// Prefix prepended to every documented path unless configured otherwise.
pub const DEFAULT_PATH_MAPPING: &str = "/api";

/// A request handler known to the service, tagged with the namespace it is defined in.
#[derive(Debug, Clone)]
pub struct RequestHandler {
    namespace: &'static str,
    path: String,
    methods: Vec<HttpMethod>,
    operation: Operation,
    schemas: Vec<(String, RefOr<Schema>)>,
    tags: Vec<Tag>,
    under_path_mapping: bool,
}

impl RequestHandler {
    /// Describe the handler whose `#[utoipa::path]` metadata is carried by `P`.
    ///
    /// `namespace` is the module path of the handler, usually `module_path!()` expanded next to
    /// the handler definition.
    pub fn of<P: utoipa::Path>(namespace: &'static str) -> Self {
        Self {
            namespace,
            path: P::path(),
            methods: P::methods(),
            operation: P::operation(),
            schemas: Vec::new(),
            tags: Vec::new(),
            under_path_mapping: false,
        }
    }

    /// Register a component schema referenced by the handler's operation.
    pub fn with_schema<T: ToSchema>(mut self) -> Self {
        self.schemas.push((T::name().into_owned(), T::schema()));
        self
    }

    /// Describe a tag the handler's operation is grouped under.
    pub fn with_tag(mut self, name: &str, description: &str) -> Self {
        self.tags.push(
            TagBuilder::new()
                .name(name)
                .description(Some(description))
                .build(),
        );
        self
    }

    /// Mark the handler as mounted below the path mapping rather than at the root.
    pub fn under_path_mapping(mut self) -> Self {
        self.under_path_mapping = true;
        self
    }

    /// URL the handler is served at once mounted with `path_mapping`.
    pub fn served_path(&self, path_mapping: &str) -> String {
        if self.under_path_mapping {
            format!("{}{}", path_mapping.trim_end_matches('/'), self.path)
        } else {
            self.path.clone()
        }
    }

    /// Module path the handler is defined in.
    pub fn namespace(&self) -> &str {
        self.namespace
    }

    /// Route path relative to the router hosting the handler.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Selection and metadata settings used to build the documentation descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationConfig {
    base_package: String,
    path_mapping: String,
    info: ApiInfo,
}

impl DocumentationConfig {
    /// Document only the handlers defined under `base_package`.
    pub fn new(base_package: impl Into<String>) -> Self {
        Self {
            base_package: base_package.into(),
            path_mapping: DEFAULT_PATH_MAPPING.to_string(),
            info: CBIOPORTAL_API_INFO,
        }
    }

    /// Replace the prefix the mapped handlers are mounted under.
    pub fn with_path_mapping(mut self, path_mapping: impl Into<String>) -> Self {
        self.path_mapping = path_mapping.into();
        self
    }

    /// Namespace used as inclusion filter.
    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    /// Prefix of the handlers mounted below the path mapping.
    pub fn path_mapping(&self) -> &str {
        &self.path_mapping
    }

    /// Whether `handler` is defined in the base package or one of its submodules.
    pub fn selects(&self, handler: &RequestHandler) -> bool {
        match handler.namespace().strip_prefix(self.base_package.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with("::"),
            None => false,
        }
    }

    /// Build the documentation descriptor for the selected subset of `handlers`.
    ///
    /// Each path is listed at the URL the handler is served at. Building is pure: the same
    /// handlers always produce an equal descriptor, and a filter that selects nothing still yields
    /// the metadata with an empty set of paths.
    pub fn build(&self, handlers: &[RequestHandler]) -> OpenApi {
        let mut paths = Paths::new();
        let mut components = ComponentsBuilder::new();
        let mut tags: Vec<Tag> = Vec::new();

        for handler in handlers.iter().filter(|handler| self.selects(handler)) {
            paths.add_path_operation(
                handler.served_path(&self.path_mapping),
                handler.methods.clone(),
                handler.operation.clone(),
            );
            for (name, schema) in &handler.schemas {
                components = components.schema(name.clone(), schema.clone());
            }
            for tag in &handler.tags {
                if tags.iter().all(|known| known.name != tag.name) {
                    tags.push(tag.clone());
                }
            }
        }

        OpenApiBuilder::new()
            .info(Info::from(&self.info))
            .paths(paths)
            .components(Some(components.build()))
            .tags((!tags.is_empty()).then_some(tags))
            .build()
    }
}
