use image::GrayImage;
use imageproc::contrast::{ThresholdType, threshold};

/// Pixels strictly above `level` become 255, everything else 0.
pub fn threshold_binary(plane: &GrayImage, level: u8) -> GrayImage {
    threshold(plane, level, ThresholdType::Binary)
}

/// Binarizes with the level picked by [`otsu_level`] and returns that level.
pub fn threshold_otsu(plane: &GrayImage) -> (GrayImage, u8) {
    let level = otsu_level(plane);
    (threshold_binary(plane, level), level)
}

/// Level maximizing the between-class variance of the plane's histogram.
///
/// Pixels at or below the returned level form the background class.
pub fn otsu_level(plane: &GrayImage) -> u8 {
    imageproc::contrast::otsu_level(plane)
}
