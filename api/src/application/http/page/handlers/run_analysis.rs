use axum::{Extension, extract::State, response::Html};
use calorie_tracker_core::domain::food_analysis::ports::FoodAnalysisService;

use crate::application::{
    http::{
        page::view::render_page,
        server::{api_entities::api_error::ApiError, app_state::AppState},
    },
    session_middleware::SessionContext,
};

/// Manual retry on the current selection.
pub async fn run_analysis(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
) -> Result<Html<String>, ApiError> {
    let session = state
        .service
        .analyze_selection(context.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(render_page(&state.args.server.root_path, &session, None))
}
