use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp, food_analysis::entities::AnalysisOutcome,
    image::entities::SelectedImage,
};

/// Per-browser state: the current selection and what was last shown for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub selected_image: Option<SelectedImage>,
    pub last_outcome: Option<AnalysisOutcome>,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            selected_image: None,
            last_outcome: None,
            created_at: now,
            last_seen_at: now,
        }
    }

    /// Replaces any previous selection. The outcome computed for the old
    /// image no longer applies and is dropped with it.
    pub fn select(&mut self, image: SelectedImage) {
        self.selected_image = Some(image);
        self.last_outcome = None;
    }

    /// Stores `outcome` only while the selection it was computed for is
    /// still current. Returns whether it was stored.
    pub fn record_outcome(
        &mut self,
        selection_id: Option<Uuid>,
        outcome: AnalysisOutcome,
    ) -> bool {
        if self.selected_image.as_ref().map(|image| image.id) != selection_id {
            return false;
        }

        self.last_outcome = Some(outcome);
        true
    }

    pub fn touch(&mut self) {
        self.last_seen_at = Utc::now();
    }

    /// Whether the session was last seen before `cutoff`.
    pub fn is_idle(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_seen_at < cutoff
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
