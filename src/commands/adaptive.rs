use image::{GrayImage, Luma};
use imageproc::filter::box_filter;
use imageproc::map::map_colors2;

use super::{BINARY_MAX, Result, ensure_odd_at_least, gaussian_blur};

/// How the local threshold of each neighborhood is averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveMethod {
    Mean,
    Gaussian,
}

/// Binarizes each pixel against the average of its `block_size` x
/// `block_size` neighborhood minus `c`.
///
/// A pixel becomes 255 when `pixel > local_average - c`.
pub fn adaptive_threshold(
    plane: &GrayImage,
    method: AdaptiveMethod,
    block_size: u32,
    c: i32,
) -> Result<GrayImage> {
    let block_size = ensure_odd_at_least("block_size", block_size, 3)?;
    let local = match method {
        AdaptiveMethod::Mean => {
            let radius = block_size / 2;
            box_filter(plane, radius, radius)
        }
        AdaptiveMethod::Gaussian => gaussian_blur(plane, block_size)?,
    };

    Ok(map_colors2(plane, &local, |pixel: Luma<u8>, average: Luma<u8>| {
        let cutoff = i32::from(average[0]) - c;
        Luma([if i32::from(pixel[0]) > cutoff {
            BINARY_MAX
        } else {
            0
        }])
    }))
}
