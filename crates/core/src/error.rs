use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpscopeError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Malformed manifest line: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, OpscopeError>;
