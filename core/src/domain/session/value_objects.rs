use uuid::Uuid;

use crate::domain::image::entities::SelectedImage;

#[derive(Debug, Clone)]
pub struct SelectImageInput {
    pub session_id: Uuid,
    pub image: SelectedImage,
}
