use axum::{Extension, extract::State, response::Html};
use calorie_tracker_core::domain::session::ports::SessionService;

use crate::application::{
    http::{
        page::view::render_page,
        server::{api_entities::api_error::ApiError, app_state::AppState},
    },
    session_middleware::SessionContext,
};

/// Renders the current session. Never calls the model.
pub async fn get_page(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> Result<Html<String>, ApiError> {
    let session = state
        .service
        .get_session(context.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(render_page(&state.args.server.root_path, &session, None))
}
