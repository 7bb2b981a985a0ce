use crate::runtime::ViewerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PresetError>;

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("preset JSON failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("preset YAML failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("preset rejected: {0}")]
    Invalid(#[from] ViewerError),
}
