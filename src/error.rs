use thiserror::Error;

#[derive(Error, Debug)]
pub enum FortuneError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Remote generation unavailable: {0}")]
    RemoteUnavailable(String),
}

pub type Result<T> = std::result::Result<T, FortuneError>;
