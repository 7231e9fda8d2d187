//! Setup errors
//!
//! Only initialization can fail. Validation failures are routine and live in
//! [`crate::form::FieldError`]; they never cross the page boundary as `Err`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InteractionError {
    #[error("Required element #{id} not found")]
    ElementNotFound { id: String },

    #[error("No element with class '{class}' next to the {field} input")]
    ErrorSlotNotFound { field: String, class: String },

    #[error("FAQ question {index} has no answer element after it")]
    MissingAnswer { index: usize },

    #[error("Document has no body")]
    NoBody,

    #[error("Config parse error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, InteractionError>;
