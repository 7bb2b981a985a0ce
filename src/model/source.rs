use std::path::{Path, PathBuf};

use image::RgbImage;

/// Decoded 8-bit RGB pixels of exactly one loaded file.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    pixels: RgbImage,
}

impl SourceImage {
    pub fn new(path: impl Into<PathBuf>, pixels: RgbImage) -> Self {
        Self {
            path: path.into(),
            pixels,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}
