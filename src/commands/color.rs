use image::{GrayImage, RgbImage};
use rayon::prelude::*;

use crate::model::ChannelId;

use super::{Result, plane_from_raw};

// BT.601 luma weights in 14-bit fixed point.
const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;

/// Builds the plane for `channel` from an RGB image.
pub fn derive_channel(rgb: &RgbImage, channel: ChannelId) -> Result<GrayImage> {
    match channel {
        ChannelId::Grayscale => luminance(rgb),
        ChannelId::Red => map_pixels(rgb, |[r, _, _]| r),
        ChannelId::Green => map_pixels(rgb, |[_, g, _]| g),
        ChannelId::Blue => map_pixels(rgb, |[_, _, b]| b),
        ChannelId::Hue => map_pixels(rgb, |pixel| rgb_to_hsv(pixel)[0]),
        ChannelId::Saturation => map_pixels(rgb, |pixel| rgb_to_hsv(pixel)[1]),
        ChannelId::Brightness => map_pixels(rgb, |pixel| rgb_to_hsv(pixel)[2]),
    }
}

pub fn luminance(rgb: &RgbImage) -> Result<GrayImage> {
    map_pixels(rgb, |[r, g, b]| {
        let weighted = u32::from(r) * LUMA_R + u32::from(g) * LUMA_G + u32::from(b) * LUMA_B;
        ((weighted + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
    })
}

/// Red, green and blue planes, in that order.
pub fn split_rgb(rgb: &RgbImage) -> Result<[GrayImage; 3]> {
    Ok([
        derive_channel(rgb, ChannelId::Red)?,
        derive_channel(rgb, ChannelId::Green)?,
        derive_channel(rgb, ChannelId::Blue)?,
    ])
}

/// Hue, saturation and brightness planes, in that order.
///
/// Hue is stored as degrees / 2 so a full turn fits in a byte (0..=179).
pub fn hsv_planes(rgb: &RgbImage) -> Result<[GrayImage; 3]> {
    let (width, height) = rgb.dimensions();
    let hsv = rgb
        .as_raw()
        .par_chunks_exact(3)
        .map(|pixel| rgb_to_hsv([pixel[0], pixel[1], pixel[2]]))
        .collect::<Vec<_>>();
    let plane = |component: usize| {
        plane_from_raw(width, height, hsv.iter().map(|value| value[component]).collect())
    };
    Ok([plane(0)?, plane(1)?, plane(2)?])
}

fn map_pixels<F>(rgb: &RgbImage, f: F) -> Result<GrayImage>
where
    F: Fn([u8; 3]) -> u8 + Sync,
{
    let (width, height) = rgb.dimensions();
    let values = rgb
        .as_raw()
        .par_chunks_exact(3)
        .map(|pixel| f([pixel[0], pixel[1], pixel[2]]))
        .collect::<Vec<_>>();
    plane_from_raw(width, height, values)
}

fn rgb_to_hsv([r, g, b]: [u8; 3]) -> [u8; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return [0, 0, max];
    }

    let delta = f32::from(max - min);
    let saturation = (255.0 * delta / f32::from(max)).round() as u8;
    let (red, green, blue) = (f32::from(r), f32::from(g), f32::from(b));
    let mut degrees = if max == r {
        60.0 * (green - blue) / delta
    } else if max == g {
        120.0 + 60.0 * (blue - red) / delta
    } else {
        240.0 + 60.0 * (red - green) / delta
    };
    if degrees < 0.0 {
        degrees += 360.0;
    }
    let hue = ((degrees / 2.0).round() as u32 % 180) as u8;
    [hue, saturation, max]
}
