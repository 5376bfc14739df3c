use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// The caller passed blank or whitespace-only input to the engine.
    #[error("Input must not be empty")]
    EmptyInput,

    /// A topic identifier outside the closed taxonomy.
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// Represents configuration-related errors (e.g., bad environment values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents data validation errors.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
