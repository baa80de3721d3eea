use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The form was refused locally; no request was sent.
    #[error("{0}")]
    ValidationFailed(String),

    #[error("Product not found")]
    NotFound,

    #[error("service responded {status}: {message}")]
    Service { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("action not available: {0}")]
    InvalidTransition(&'static str),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
