use std::path::Path;

use image::GrayImage;

use crate::model::SourceImage;

use super::raster::{decode_rgb, encode_gray};
use super::util::extension;
use super::{IoError, Result};

const READABLE: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "jfif"];
const WRITABLE: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff"];

/// Decodes `path` into an RGB source image.
///
/// The format is detected from the file contents, so extensions such as
/// `.jfif` that the encoder table does not list still decode.
pub fn read_source(path: impl AsRef<Path>) -> Result<SourceImage> {
    let path = path.as_ref();
    let pixels = decode_rgb(path)?;
    Ok(SourceImage::new(path, pixels))
}

/// Writes a single-channel plane, choosing the encoder from the extension.
pub fn write_plane(path: impl AsRef<Path>, plane: &GrayImage) -> Result<()> {
    let path = path.as_ref();
    match extension(path) {
        Some(ext) if WRITABLE.contains(&ext.as_str()) => encode_gray(path, plane),
        Some(ext) => Err(IoError::UnsupportedFormat(ext)),
        None => Err(IoError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Extensions offered by the file picker.
pub fn supported_formats() -> &'static [&'static str] {
    READABLE
}

pub fn is_supported_image_path(path: &Path) -> bool {
    extension(path).is_some_and(|ext| READABLE.contains(&ext.as_str()))
}
