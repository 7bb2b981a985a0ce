use image::GrayImage;
use rayon::prelude::*;

use super::util::clamp_index;
use super::{Result, ensure_odd_at_least, plane_from_raw};

// Binomial kernels used for the small sizes when no sigma is given.
const KERNEL_3: [f32; 3] = [0.25, 0.5, 0.25];
const KERNEL_5: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];
const KERNEL_7: [f32; 7] = [
    0.031_25, 0.109_375, 0.218_75, 0.281_25, 0.218_75, 0.109_375, 0.031_25,
];

/// Normalized 1-D Gaussian kernel with `size` taps.
///
/// Sizes above 7 derive sigma from the size as
/// `0.3 * ((size - 1) / 2 - 1) + 0.8`.
pub fn gaussian_kernel(size: u32) -> Result<Vec<f32>> {
    let size = ensure_odd_at_least("kernel size", size, 1)?;
    let kernel = match size {
        1 => vec![1.0],
        3 => KERNEL_3.to_vec(),
        5 => KERNEL_5.to_vec(),
        7 => KERNEL_7.to_vec(),
        _ => {
            let sigma = 0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8;
            let radius = (size / 2) as i32;
            let mut kernel = (-radius..=radius)
                .map(|offset| {
                    let distance = offset as f32;
                    (-(distance * distance) / (2.0 * sigma * sigma)).exp()
                })
                .collect::<Vec<_>>();
            let sum = kernel.iter().sum::<f32>();
            kernel
                .iter_mut()
                .for_each(|value| *value /= sum.max(f32::EPSILON));
            kernel
        }
    };
    Ok(kernel)
}

/// Separable Gaussian smoothing with a `size` x `size` kernel.
///
/// Borders replicate the edge sample. Rows are filtered in parallel.
pub fn gaussian_blur(plane: &GrayImage, size: u32) -> Result<GrayImage> {
    let kernel = gaussian_kernel(size)?;
    let (width, height) = plane.dimensions();
    if kernel.len() == 1 || width == 0 || height == 0 {
        return Ok(plane.clone());
    }

    let (columns, rows) = (width as usize, height as usize);
    let radius = (kernel.len() / 2) as isize;
    let source = plane.as_raw();

    let mut horizontal = vec![0.0_f32; columns * rows];
    horizontal
        .par_chunks_mut(columns)
        .enumerate()
        .for_each(|(y, lane)| {
            let input = &source[y * columns..(y + 1) * columns];
            for (x, output) in lane.iter_mut().enumerate() {
                *output = convolve_at(|index| f32::from(input[index]), columns, x, &kernel, radius);
            }
        });

    let mut blurred = vec![0_u8; columns * rows];
    blurred
        .par_chunks_mut(columns)
        .enumerate()
        .for_each(|(y, lane)| {
            for (x, output) in lane.iter_mut().enumerate() {
                let sum =
                    convolve_at(|index| horizontal[index * columns + x], rows, y, &kernel, radius);
                *output = sum.round().clamp(0.0, 255.0) as u8;
            }
        });

    plane_from_raw(width, height, blurred)
}

fn convolve_at<S>(sample: S, len: usize, coord: usize, kernel: &[f32], radius: isize) -> f32
where
    S: Fn(usize) -> f32,
{
    let mut sum = 0.0_f32;
    for (kernel_index, weight) in kernel.iter().enumerate() {
        let candidate = coord as isize + kernel_index as isize - radius;
        sum += sample(clamp_index(candidate, len)) * *weight;
    }
    sum
}
