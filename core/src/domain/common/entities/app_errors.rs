use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The selected image could not be turned into bytes for the model.
    #[error("Error processing image: {0}")]
    Processing(String),

    /// The call to the hosted model failed for any reason.
    #[error("Error generating response: {0}")]
    Inference(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Not found")]
    NotFound,
}
