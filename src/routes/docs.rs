use axum::Router;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::SharedState;

/// Serve the Swagger UI backed by the documentation descriptor held in the shared state.
pub fn router(state: &SharedState) -> Router<SharedState> {
    let config = state.config();
    SwaggerUi::new(config.swagger_ui_path().to_string())
        .url(
            config.docs_path().to_string(),
            state.documentation().clone(),
        )
        .into()
}
