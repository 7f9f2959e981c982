use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::entities::AnalysisOutcome,
    image::entities::{ImagePayload, SelectedImage},
    session::entities::Session,
};

/// LLM Client trait for calling multimodal models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Single call, no retry. Every failure comes back as `CoreError::Inference`.
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn is_configured(&self) -> bool;
}

/// Service trait for food analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    /// Runs the pipeline for one image. Never fails: processing and
    /// inference errors are folded into `AnalysisOutcome::Failed`.
    fn analyze_image(
        &self,
        image: Option<SelectedImage>,
    ) -> impl Future<Output = AnalysisOutcome> + Send;

    /// Analyzes the session's current selection and stores the outcome on it.
    fn analyze_selection(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;
}
