use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The classifier artifact could not be read or is structurally invalid.
    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    /// No classifier is loaded; the service is running without a model.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("{0}")]
    PredictionFailed(String),
}
