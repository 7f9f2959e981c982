use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{
        entities::Session,
        ports::{SessionRepository, SessionUpdate},
    },
};

/// Process-local session store. Sessions die with the process.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: Session) -> Result<Session, CoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(CoreError::Invalid(format!(
                "session {} already exists",
                session.id
            )));
        }

        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn get(&self, session_id: Uuid) -> Result<Option<Session>, CoreError> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn update(
        &self,
        session_id: Uuid,
        update: SessionUpdate,
    ) -> Result<Option<Session>, CoreError> {
        let mut sessions = self.sessions.write().await;

        Ok(sessions.get_mut(&session_id).map(|session| {
            update(session);
            session.clone()
        }))
    }

    async fn delete(&self, session_id: Uuid) -> Result<(), CoreError> {
        self.sessions.write().await.remove(&session_id);
        Ok(())
    }

    async fn purge_idle(&self, cutoff: DateTime<Utc>) -> Result<usize, CoreError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_seen_at >= cutoff);

        Ok(before - sessions.len())
    }
}
