use serde::Serialize;
use utoipa::ToSchema;

use crate::services::api_info::ApiInfo;

/// Service metadata returned by the `/info` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfoResponse {
    /// Human readable API title.
    pub title: String,
    /// Free text describing the API.
    pub description: String,
    /// API version label.
    pub version: String,
    /// Location of the terms of service.
    pub terms_of_service_url: String,
    /// Address to reach the maintainers.
    pub contact_email: String,
    /// License display name.
    pub license_name: String,
    /// Location of the license text.
    pub license_url: String,
}

impl From<&ApiInfo> for ApiInfoResponse {
    fn from(value: &ApiInfo) -> Self {
        Self {
            title: value.title.into(),
            description: value.description.into(),
            version: value.version.into(),
            terms_of_service_url: value.terms_of_service_url.into(),
            contact_email: value.contact_email.into(),
            license_name: value.license_name.into(),
            license_url: value.license_url.into(),
        }
    }
}
