use axum::extract::Multipart;
use calorie_tracker_core::domain::image::entities::{ImageSource, SelectedImage};
use tracing::error;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Name of the multipart field carrying the image on every form.
pub const IMAGE_FIELD: &str = "image";

/// Reads the `image` field of a multipart form. `Ok(None)` means the form
/// carried no image, or an empty one.
pub async fn read_image_field(
    multipart: &mut Multipart,
    source: ImageSource,
    max_bytes: usize,
) -> Result<Option<SelectedImage>, ApiError> {
    let mut image: Option<SelectedImage> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);

        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read image bytes: {}", e);
            ApiError::BadRequest(format!("Failed to read image: {}", e))
        })?;

        if data.len() > max_bytes {
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                max_bytes
            )));
        }

        if data.is_empty() {
            continue;
        }

        image = Some(SelectedImage::new(source, file_name, content_type, data));
    }

    Ok(image)
}
