use std::future::Future;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{entities::Session, value_objects::SelectImageInput},
};

/// In-place change applied to a stored session.
pub type SessionUpdate = Box<dyn FnOnce(&mut Session) + Send>;

/// Storage for per-browser sessions.
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn create(
        &self,
        session: Session,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<Session>, CoreError>> + Send;

    /// Applies `update` to the stored session while holding it exclusively,
    /// returning the result, or `None` when no such session exists.
    fn update(
        &self,
        session_id: Uuid,
        update: SessionUpdate,
    ) -> impl Future<Output = Result<Option<Session>, CoreError>> + Send;

    fn delete(&self, session_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Removes every session last seen before `cutoff`, returning how many went.
    fn purge_idle(
        &self,
        cutoff: DateTime<Utc>,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SessionService: Send + Sync {
    /// Returns the live session for `session_id`, or a fresh one when the id
    /// is missing, unknown or idle past the TTL.
    fn resolve_session(
        &self,
        session_id: Option<Uuid>,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn select_image(
        &self,
        input: SelectImageInput,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;
}
