use axum::extract::{Multipart, State};
use calorie_tracker_core::domain::{
    food_analysis::{entities::AnalysisOutcome, ports::FoodAnalysisService},
    image::entities::ImageSource,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    image_field::read_image_field,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodResponse {
    pub data: AnalysisOutcome,
}

/// Multipart body accepted by [`analyze_food_image`].
#[derive(Debug, ToSchema)]
pub struct AnalyzeFoodImageForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "food-analysis",
    summary = "Analyze food from image",
    description = "Sends one image with the nutritionist prompt to the model. \
        Failures are reported in the body as a `failed` outcome.",
    request_body(content = AnalyzeFoodImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeFoodResponse),
        (status = 400, description = "Malformed multipart body"),
        (status = 413, description = "Image too large")
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let image = read_image_field(
        &mut multipart,
        ImageSource::Upload,
        state.args.image.max_image_bytes,
    )
    .await?;

    let outcome = state.service.analyze_image(image).await;

    Ok(Response::OK(AnalyzeFoodResponse { data: outcome }))
}
