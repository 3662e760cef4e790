use thiserror::Error;

/// Errors raised while building, loading or driving a grid world.
#[derive(Debug, Error)]
pub enum GridError {
    /// The map cannot describe a valid MDP: missing start/goal, ragged rows, unknown codes.
    #[error("invalid grid configuration: {0}")]
    Configuration(String),

    /// Only the four compass moves exist.
    #[error("invalid action index {0}, expected one of 0..4")]
    InvalidAction(usize),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
