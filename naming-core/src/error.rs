use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamingError {
    #[error("Unknown mode: {0} (expected video or static)")]
    UnknownMode(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid field assignment '{0}', expected key=value")]
    InvalidAssignment(String),

    #[error("Field record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NamingError>;
