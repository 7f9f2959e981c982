use crate::{
    domain::{
        common::{CalorieTrackerConfig, entities::app_errors::CoreError, services::Service},
        food_analysis::ports::LLMClient,
    },
    infrastructure::{llm::GeminiLLMClient, session::InMemorySessionRepository},
};

pub type CalorieTrackerService = Service<InMemorySessionRepository, GeminiLLMClient>;

pub fn create_service(config: CalorieTrackerConfig) -> Result<CalorieTrackerService, CoreError> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    if !llm_client.is_configured() {
        tracing::warn!("no Gemini API key configured, every analysis will fail");
    }

    Ok(Service::new(
        InMemorySessionRepository::new(),
        llm_client,
        config.image,
        config.session,
    ))
}
