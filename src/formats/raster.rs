use std::path::Path;

use image::{GrayImage, ImageReader, RgbImage};

use super::Result;

pub(crate) fn decode_rgb(path: &Path) -> Result<RgbImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image.to_rgb8())
}

pub(crate) fn encode_gray(path: &Path, plane: &GrayImage) -> Result<()> {
    plane.save(path)?;
    Ok(())
}
