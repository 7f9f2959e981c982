use axum::{
    Extension,
    extract::{Multipart, State},
    response::Html,
};
use calorie_tracker_core::domain::image::entities::ImageSource;

use crate::application::{
    http::{
        page::selection::select_and_analyze,
        server::{api_entities::api_error::ApiError, app_state::AppState},
    },
    session_middleware::SessionContext,
};

pub async fn capture_image(
    State(state): State<AppState>,
    Extension(context): Extension<SessionContext>,
    multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    select_and_analyze(&state, &context, multipart, ImageSource::Camera).await
}
