use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReopenError>;

#[derive(Debug, Error)]
pub enum ReopenError {
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("editor failed: {0}")]
    Editor(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}
