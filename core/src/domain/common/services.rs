use std::sync::Arc;

use crate::domain::{
    common::{ImageConfig, SessionConfig},
    food_analysis::ports::LLMClient,
    session::ports::SessionRepository,
};

/// Application service wiring the session store and the model client together.
///
/// Domain behaviour lives in the `services` module of each domain, as trait
/// implementations over this struct.
pub struct Service<S, LLM>
where
    S: SessionRepository,
    LLM: LLMClient,
{
    pub(crate) session_repository: Arc<S>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) image_config: ImageConfig,
    pub(crate) session_config: SessionConfig,
}

impl<S, LLM> Service<S, LLM>
where
    S: SessionRepository,
    LLM: LLMClient,
{
    pub fn new(
        session_repository: S,
        llm_client: LLM,
        image_config: ImageConfig,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            session_repository: Arc::new(session_repository),
            llm_client: Arc::new(llm_client),
            image_config,
            session_config,
        }
    }

    /// Whether the model client holds a credential.
    pub fn llm_configured(&self) -> bool {
        self.llm_client.is_configured()
    }
}

impl<S, LLM> Clone for Service<S, LLM>
where
    S: SessionRepository,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            session_repository: Arc::clone(&self.session_repository),
            llm_client: Arc::clone(&self.llm_client),
            image_config: self.image_config.clone(),
            session_config: self.session_config.clone(),
        }
    }
}
