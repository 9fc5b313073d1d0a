use axum::{Json, Router, routing::get};

use crate::{
    dto::api_info::ApiInfoResponse,
    services::{api_info::CBIOPORTAL_API_INFO, documentation::RequestHandler},
    state::SharedState,
};

#[utoipa::path(
    get,
    path = "/info",
    tag = "info",
    responses((status = 200, description = "API metadata", body = ApiInfoResponse))
)]
/// Return the title, version, contact and license of the web API.
pub async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse::from(&CBIOPORTAL_API_INFO))
}

/// Configure the info routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/info", get(api_info))
}

/// Request handlers defined in this module.
pub fn handlers() -> Vec<RequestHandler> {
    vec![
        RequestHandler::of::<__path_api_info>(module_path!())
            .under_path_mapping()
            .with_schema::<ApiInfoResponse>()
            .with_tag("info", "Service metadata of the cBioPortal web API"),
    ]
}
