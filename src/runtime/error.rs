use std::path::PathBuf;

use crate::commands::OpsError;
use crate::formats::IoError;
use crate::model::ModelError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to load image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("no image loaded")]
    NoImageLoaded,

    #[error("image operation failed: {0}")]
    Operation(#[from] OpsError),
}

impl From<ModelError> for ViewerError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::UnknownChannel(name) => ViewerError::UnknownChannel(name),
            ModelError::UnknownAlgorithm(_) => ViewerError::InvalidParameter(error.to_string()),
        }
    }
}
