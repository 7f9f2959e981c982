use chrono::{DateTime, TimeDelta, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_DECLARED_MEDIA_TYPE: &str = "image/jpeg";

#[derive(Clone, Debug)]
pub struct CalorieTrackerConfig {
    pub llm: LLMConfig,
    pub image: ImageConfig,
    pub session: SessionConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// `None` makes every inference call fail with an authentication error.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct ImageConfig {
    pub declared_media_type: String,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub idle_ttl_secs: i64,
}

impl SessionConfig {
    /// Instant before which a session seen at `now` counts as idle.
    pub fn idle_cutoff(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>, CoreError> {
        TimeDelta::try_seconds(self.idle_ttl_secs)
            .filter(|ttl| *ttl > TimeDelta::zero())
            .and_then(|ttl| now.checked_sub_signed(ttl))
            .ok_or_else(|| {
                CoreError::Invalid(format!(
                    "session idle TTL of {} seconds is out of range",
                    self.idle_ttl_secs
                ))
            })
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            declared_media_type: DEFAULT_DECLARED_MEDIA_TYPE.to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: 3600,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_cutoff() {
        let now = Utc::now();
        let config = SessionConfig { idle_ttl_secs: 60 };

        assert_eq!(config.idle_cutoff(now).unwrap(), now - TimeDelta::seconds(60));
    }

    #[test]
    fn test_idle_cutoff_out_of_range() {
        let now = Utc::now();

        for idle_ttl_secs in [i64::MAX, 0, -5] {
            let config = SessionConfig { idle_ttl_secs };
            assert!(matches!(config.idle_cutoff(now), Err(CoreError::Invalid(_))));
        }
    }
}
