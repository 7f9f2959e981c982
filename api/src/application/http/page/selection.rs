use axum::{extract::Multipart, response::Html};
use calorie_tracker_core::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::ports::FoodAnalysisService,
    image::entities::ImageSource,
    session::{ports::SessionService, value_objects::SelectImageInput},
};
use tracing::warn;

use crate::application::{
    http::{
        image_field::read_image_field,
        page::view::render_page,
        server::{api_entities::api_error::ApiError, app_state::AppState},
    },
    session_middleware::SessionContext,
};

/// Makes the submitted image the session's selection and analyzes it once.
///
/// A form without an image leaves the selection alone. Unreadable forms and
/// rejected uploads render the page with the error and no model call.
pub async fn select_and_analyze(
    state: &AppState,
    context: &SessionContext,
    mut multipart: Multipart,
    source: ImageSource,
) -> Result<Html<String>, ApiError> {
    let root_path = &state.args.server.root_path;

    let image = match read_image_field(
        &mut multipart,
        source,
        state.args.image.max_image_bytes,
    )
    .await
    {
        Ok(image) => image,
        Err(e) => {
            warn!(session_id = %context.session_id, error = %e, "image could not be read");
            let notice = CoreError::Processing(e.to_string()).to_string();
            return render_current(state, context, Some(&notice)).await;
        }
    };

    let Some(image) = image else {
        return render_current(state, context, None).await;
    };

    match state
        .service
        .select_image(SelectImageInput {
            session_id: context.session_id,
            image,
        })
        .await
    {
        Ok(_) => {}
        Err(e @ CoreError::Invalid(_)) => {
            warn!(session_id = %context.session_id, error = %e, "selection rejected");
            return render_current(state, context, Some(&e.to_string())).await;
        }
        Err(e) => return Err(ApiError::from(e)),
    }

    let session = state
        .service
        .analyze_selection(context.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(render_page(root_path, &session, None))
}

async fn render_current(
    state: &AppState,
    context: &SessionContext,
    notice: Option<&str>,
) -> Result<Html<String>, ApiError> {
    let session = state
        .service
        .get_session(context.session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(render_page(&state.args.server.root_path, &session, notice))
}
