use utoipa::OpenApi;

use crate::application::http::food_analysis::router::FoodAnalysisApiDoc;
use crate::application::http::health::HealthApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calorie Tracker",
        description = "Nutritional analysis of food photos by a hosted multimodal model"
    ),
    nest(
        (path = "/api/food-analysis", api = FoodAnalysisApiDoc),
        (path = "/health", api = HealthApiDoc)
    )
)]
pub struct ApiDoc;
