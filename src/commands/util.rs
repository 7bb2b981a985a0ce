use image::GrayImage;

use super::{OpsError, Result};

/// Foreground value written by every binarization.
pub(crate) const BINARY_MAX: u8 = 255;

pub(crate) fn ensure_odd_at_least(name: &str, value: u32, minimum: u32) -> Result<u32> {
    if value < minimum || value % 2 == 0 {
        return Err(OpsError::InvalidParams(format!(
            "`{name}` must be an odd integer >= {minimum}, got {value}"
        )));
    }
    Ok(value)
}

pub(crate) fn plane_from_raw(width: u32, height: u32, values: Vec<u8>) -> Result<GrayImage> {
    let expected = width as usize * height as usize;
    let actual = values.len();
    GrayImage::from_raw(width, height, values).ok_or_else(|| {
        OpsError::UnsupportedLayout(format!(
            "expected {expected} samples for a {width}x{height} plane, found {actual}"
        ))
    })
}

/// Index along one axis after replicating the border sample.
pub(crate) fn clamp_index(candidate: isize, len: usize) -> usize {
    candidate.clamp(0, len as isize - 1) as usize
}
