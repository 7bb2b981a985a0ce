use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("could not read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not decode or encode image: {0}")]
    Image(#[from] image::ImageError),
}
