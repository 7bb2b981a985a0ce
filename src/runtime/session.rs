use std::path::Path;
use std::time::{Duration, Instant};

use image::GrayImage;
use log::debug;

use crate::commands::{AdaptiveMethod, adaptive_threshold, threshold_binary, threshold_otsu};
use crate::model::{Algorithm, ChannelId};

use super::{ImageDerivationStore, RenderParameters, Result, ViewerError};

/// A binarized plane together with how it was produced.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: GrayImage,
    pub channel: ChannelId,
    pub algorithm: Algorithm,
    /// Level chosen by Otsu's method; `None` for the other algorithms.
    pub otsu_level: Option<u8>,
    /// `Some(hit)` when blur was enabled for this render.
    pub blur_cache_hit: Option<bool>,
    pub elapsed: Duration,
}

impl RenderOutput {
    pub fn foreground_pixels(&self) -> usize {
        self.image.as_raw().iter().filter(|value| **value > 0).count()
    }
}

/// The loaded image and the parameters driving its render.
///
/// Setters that change the selected channel or the blur radius drop the
/// cached blur so a render never reuses a plane computed for other inputs.
#[derive(Debug, Clone, Default)]
pub struct RenderSession {
    store: ImageDerivationStore,
    params: RenderParameters,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(params: RenderParameters) -> Self {
        Self {
            store: ImageDerivationStore::new(),
            params,
        }
    }

    pub fn store(&self) -> &ImageDerivationStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ImageDerivationStore {
        &mut self.store
    }

    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.store.load(path)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Swaps in a whole parameter set, e.g. from a preset.
    pub fn replace_parameters(&mut self, params: RenderParameters) {
        if params.channel() != self.params.channel()
            || params.blur_radius() != self.params.blur_radius()
        {
            self.store.invalidate_blur();
        }
        self.params = params;
    }

    pub fn set_channel(&mut self, channel: ChannelId) {
        if channel != self.params.channel() {
            self.params.set_channel(channel);
            self.store.invalidate_blur();
        }
    }

    pub fn set_channel_by_name(&mut self, name: &str) -> Result<()> {
        let channel: ChannelId = name.parse()?;
        self.set_channel(channel);
        Ok(())
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.params.set_algorithm(algorithm);
    }

    pub fn set_algorithm_by_tag(&mut self, tag: &str) -> Result<()> {
        self.params.set_algorithm_by_tag(tag)
    }

    pub fn set_threshold(&mut self, value: i32) -> Result<()> {
        self.params.set_threshold(value)
    }

    pub fn set_block_size(&mut self, value: i32) -> Result<()> {
        self.params.set_block_size(value)
    }

    pub fn set_constant_c(&mut self, value: i32) -> Result<()> {
        self.params.set_constant_c(value)
    }

    pub fn set_blur_radius(&mut self, value: i32) -> Result<()> {
        let previous = self.params.blur_radius();
        self.params.set_blur_radius(value)?;
        if self.params.blur_radius() != previous {
            self.store.invalidate_blur();
        }
        Ok(())
    }

    pub fn set_blur_enabled(&mut self, enabled: bool) {
        self.params.set_blur_enabled(enabled);
    }

    pub fn render(&mut self) -> Result<GrayImage> {
        Ok(self.render_report()?.image)
    }

    pub fn render_report(&mut self) -> Result<RenderOutput> {
        if !self.store.is_loaded() {
            return Err(ViewerError::NoImageLoaded);
        }

        let started = Instant::now();
        let params = self.params.clone();
        let (working, blur_cache_hit) = if params.blur_enabled() {
            let (plane, hit) = self
                .store
                .blurred_channel(params.channel(), params.blur_radius())?;
            (plane, Some(hit))
        } else {
            (self.store.get_channel(params.channel())?, None)
        };
        let (image, otsu_level) = binarize(working, &params)?;
        let elapsed = started.elapsed();

        debug!(
            "rendered {} on {} in {:.2} ms (blur: {:?}, otsu level: {:?})",
            params.algorithm(),
            params.channel(),
            elapsed.as_secs_f64() * 1_000.0,
            blur_cache_hit,
            otsu_level
        );

        Ok(RenderOutput {
            image,
            channel: params.channel(),
            algorithm: params.algorithm(),
            otsu_level,
            blur_cache_hit,
            elapsed,
        })
    }
}

fn binarize(plane: &GrayImage, params: &RenderParameters) -> Result<(GrayImage, Option<u8>)> {
    let output = match params.algorithm() {
        Algorithm::GlobalThresh => (threshold_binary(plane, params.threshold()), None),
        Algorithm::AdaptiveMean => (
            adaptive_threshold(
                plane,
                AdaptiveMethod::Mean,
                params.block_size(),
                params.constant_c(),
            )?,
            None,
        ),
        Algorithm::AdaptiveGaussian => (
            adaptive_threshold(
                plane,
                AdaptiveMethod::Gaussian,
                params.block_size(),
                params.constant_c(),
            )?,
            None,
        ),
        // The threshold level plays no part here.
        Algorithm::Otsu => {
            let (image, level) = threshold_otsu(plane);
            (image, Some(level))
        }
    };
    Ok(output)
}
