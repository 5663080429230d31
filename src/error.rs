use thiserror::Error;

/// Custom error types for titlepick
#[derive(Debug, Error)]
pub enum TitlepickError {
    #[error("Could not read config file: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
