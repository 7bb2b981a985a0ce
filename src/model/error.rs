use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown channel `{0}`")]
    UnknownChannel(String),

    #[error("unknown threshold algorithm `{0}`")]
    UnknownAlgorithm(String),
}
