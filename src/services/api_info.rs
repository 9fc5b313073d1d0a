//! Static metadata published in the documentation descriptor.

use utoipa::openapi::{ContactBuilder, Info, InfoBuilder, LicenseBuilder};

/// Metadata describing the cBioPortal web API.
pub const CBIOPORTAL_API_INFO: ApiInfo = ApiInfo {
    title: "cBioPortal web API",
    description: "A web service for supplying JSON formatted data to cBioPortal clients.",
    version: "1.0 (beta)",
    terms_of_service_url: "www.cbioportal.org",
    contact_email: "cbioportal@googlegroups.com",
    license_name: "License",
    license_url: "https://github.com/cBioPortal/cbioportal/blob/master/LICENSE",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Service-level metadata shown at the top of the generated documentation.
pub struct ApiInfo {
    /// Human readable API title.
    pub title: &'static str,
    /// Free text describing the API.
    pub description: &'static str,
    /// API version label.
    pub version: &'static str,
    /// Location of the terms of service.
    pub terms_of_service_url: &'static str,
    /// Address to reach the maintainers.
    pub contact_email: &'static str,
    /// License display name.
    pub license_name: &'static str,
    /// Location of the license text.
    pub license_url: &'static str,
}

impl From<&ApiInfo> for Info {
    fn from(value: &ApiInfo) -> Self {
        InfoBuilder::new()
            .title(value.title)
            .description(Some(value.description))
            .version(value.version)
            .terms_of_service(Some(value.terms_of_service_url))
            .contact(Some(
                ContactBuilder::new()
                    .email(Some(value.contact_email))
                    .build(),
            ))
            .license(Some(
                LicenseBuilder::new()
                    .name(value.license_name)
                    .url(Some(value.license_url))
                    .build(),
            ))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_carries_every_metadata_field() {
        let info = Info::from(&CBIOPORTAL_API_INFO);

        assert_eq!(info.title, "cBioPortal web API");
        assert_eq!(info.version, "1.0 (beta)");
        assert_eq!(
            info.description.as_deref(),
            Some("A web service for supplying JSON formatted data to cBioPortal clients.")
        );
        assert_eq!(info.terms_of_service.as_deref(), Some("www.cbioportal.org"));

        let contact = info.contact.expect("contact");
        assert_eq!(contact.email.as_deref(), Some("cbioportal@googlegroups.com"));

        let license = info.license.expect("license");
        assert_eq!(license.name, "License");
        assert_eq!(
            license.url.as_deref(),
            Some("https://github.com/cBioPortal/cbioportal/blob/master/LICENSE")
        );
    }
}
