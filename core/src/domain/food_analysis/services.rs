use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::AnalysisOutcome,
        ports::{FoodAnalysisService, LLMClient},
        prompt::FOOD_ANALYSIS_PROMPT,
    },
    image::{entities::SelectedImage, services::prepare_image},
    session::{entities::Session, ports::SessionRepository},
};

impl<S, LLM> FoodAnalysisService for Service<S, LLM>
where
    S: SessionRepository,
    LLM: LLMClient,
{
    async fn analyze_image(&self, image: Option<SelectedImage>) -> AnalysisOutcome {
        let Some(image) = image else {
            return AnalysisOutcome::no_selection();
        };

        let payload = match prepare_image(&image, &self.image_config.declared_media_type) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(source = ?image.source, error = %e, "image could not be prepared");
                return AnalysisOutcome::failed(e.to_string());
            }
        };

        match self
            .llm_client
            .generate_with_image(FOOD_ANALYSIS_PROMPT.to_string(), payload)
            .await
        {
            Ok(text) => {
                info!(chars = text.len(), "analysis completed");
                AnalysisOutcome::completed(text)
            }
            Err(e) => {
                error!(error = %e, "analysis failed");
                AnalysisOutcome::failed(e.to_string())
            }
        }
    }

    async fn analyze_selection(&self, session_id: Uuid) -> Result<Session, CoreError> {
        let image = self
            .session_repository
            .get(session_id)
            .await?
            .ok_or(CoreError::NotFound)?
            .selected_image;
        let selection_id = image.as_ref().map(|image| image.id);

        let outcome = self.analyze_image(image).await;

        // The selection may have changed while the model was running; the
        // newer selection wins and this outcome is dropped.
        self.session_repository
            .update(
                session_id,
                Box::new(move |session: &mut Session| {
                    if !session.record_outcome(selection_id, outcome) {
                        debug!(session_id = %session.id, "selection changed during analysis");
                    }
                    session.touch();
                }),
            )
            .await?
            .ok_or(CoreError::NotFound)
    }
}
