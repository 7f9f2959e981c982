use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NO_SELECTION_MESSAGE: &str =
    "Please select an image by either capturing one or uploading it.";

/// What the results region shows. Every variant renders to a single string;
/// the model text is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    NoSelection { message: String },
    Completed { text: String },
    Failed { message: String },
}

impl AnalysisOutcome {
    pub fn no_selection() -> Self {
        Self::NoSelection {
            message: NO_SELECTION_MESSAGE.to_string(),
        }
    }

    pub fn completed(text: impl Into<String>) -> Self {
        Self::Completed { text: text.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::NoSelection { message } | Self::Failed { message } => message,
            Self::Completed { text } => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
