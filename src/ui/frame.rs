use eframe::egui;
use image::{GrayImage, RgbImage};

const MAX_MAGNIFICATION: f32 = 8.0;

pub(super) fn gray_to_color(plane: &GrayImage) -> egui::ColorImage {
    let (width, height) = plane.dimensions();
    egui::ColorImage::from_gray([width as usize, height as usize], plane.as_raw())
}

pub(super) fn rgb_to_color(image: &RgbImage) -> egui::ColorImage {
    let (width, height) = image.dimensions();
    egui::ColorImage::from_rgb([width as usize, height as usize], image.as_raw())
}

/// Largest size with the image's aspect ratio that fits in `available`.
pub(super) fn fit_size(image_size: [usize; 2], available: egui::Vec2) -> egui::Vec2 {
    let image_w = image_size[0].max(1) as f32;
    let image_h = image_size[1].max(1) as f32;
    let magnification = (available.x / image_w)
        .min(available.y / image_h)
        .clamp(0.0, MAX_MAGNIFICATION);
    egui::vec2(image_w * magnification, image_h * magnification)
}
