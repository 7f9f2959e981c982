use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::LLMClient,
    image::{entities::ImageSource, services::ensure_upload_allowed},
    session::{
        entities::Session,
        ports::{SessionRepository, SessionService},
        value_objects::SelectImageInput,
    },
};

impl<S, LLM> SessionService for Service<S, LLM>
where
    S: SessionRepository,
    LLM: LLMClient,
{
    async fn resolve_session(&self, session_id: Option<Uuid>) -> Result<Session, CoreError> {
        let cutoff = self.session_config.idle_cutoff(Utc::now())?;

        if let Some(session_id) = session_id
            && let Some(session) = self.session_repository.get(session_id).await?
        {
            if session.is_idle(cutoff) {
                debug!(session_id = %session_id, "session expired");
                self.session_repository.delete(session_id).await?;
            } else if let Some(session) = self
                .session_repository
                .update(session_id, Box::new(Session::touch))
                .await?
            {
                return Ok(session);
            }
        }

        let purged = self.session_repository.purge_idle(cutoff).await?;
        if purged > 0 {
            debug!(purged, "purged idle sessions");
        }

        let session = self.session_repository.create(Session::new()).await?;
        debug!(session_id = %session.id, "session created");

        Ok(session)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Session, CoreError> {
        self.session_repository
            .get(session_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn select_image(&self, input: SelectImageInput) -> Result<Session, CoreError> {
        let SelectImageInput { session_id, image } = input;

        if image.source == ImageSource::Upload {
            ensure_upload_allowed(&image)?;
        }

        info!(
            session_id = %session_id,
            source = ?image.source,
            bytes = image.len(),
            "image selected"
        );

        self.session_repository
            .update(
                session_id,
                Box::new(move |session: &mut Session| {
                    session.select(image);
                    session.touch();
                }),
            )
            .await?
            .ok_or(CoreError::NotFound)
    }
}
