use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpsError>;

#[derive(Debug, Error)]
pub enum OpsError {
    #[error("invalid operation parameters: {0}")]
    InvalidParams(String),

    #[error("unsupported plane layout: {0}")]
    UnsupportedLayout(String),
}
