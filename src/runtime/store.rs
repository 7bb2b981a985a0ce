use std::path::Path;

use image::GrayImage;
use log::{debug, info};

use crate::commands::{gaussian_blur, hsv_planes, luminance, split_rgb};
use crate::formats::read_source;
use crate::model::{ChannelId, SourceImage};

use super::params::odd_at_least;
use super::{Result, ViewerError};

/// The seven derived planes of one source image, always fully populated.
#[derive(Debug, Clone)]
pub struct ChannelSet {
    planes: [GrayImage; ChannelId::COUNT],
}

impl ChannelSet {
    /// Derives every plane; the HSV conversion runs once per pixel.
    pub fn derive(source: &SourceImage) -> Result<Self> {
        let pixels = source.pixels();
        let (gray, (rgb, hsv)) = rayon::join(
            || luminance(pixels),
            || rayon::join(|| split_rgb(pixels), || hsv_planes(pixels)),
        );
        let [red, green, blue] = rgb?;
        let [hue, saturation, brightness] = hsv?;
        Ok(Self {
            planes: [gray?, red, green, blue, hue, saturation, brightness],
        })
    }

    pub fn get(&self, channel: ChannelId) -> &GrayImage {
        &self.planes[channel.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChannelId, &GrayImage)> {
        ChannelId::ALL.into_iter().zip(self.planes.iter())
    }
}

/// Identity of a blurred plane: which channel of which load, at which radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlurKey {
    pub channel: ChannelId,
    pub generation: u64,
    pub radius: u32,
}

#[derive(Debug, Clone)]
struct BlurEntry {
    key: BlurKey,
    plane: GrayImage,
}

/// Holds at most one blurred plane and only hands it out for its exact key.
#[derive(Debug, Clone, Default)]
pub struct BlurCache {
    entry: Option<BlurEntry>,
}

impl BlurCache {
    pub fn get(&self, key: &BlurKey) -> Option<&GrayImage> {
        self.entry
            .as_ref()
            .filter(|entry| entry.key == *key)
            .map(|entry| &entry.plane)
    }

    pub fn key(&self) -> Option<BlurKey> {
        self.entry.as_ref().map(|entry| entry.key)
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn invalidate(&mut self) {
        if let Some(entry) = self.entry.take() {
            debug!("blur cache invalidated ({:?})", entry.key);
        }
    }

    fn store(&mut self, key: BlurKey, plane: GrayImage) -> &GrayImage {
        &self.entry.insert(BlurEntry { key, plane }).plane
    }

    /// Returns the cached plane for `key`, computing it with `blur` on a miss.
    /// The flag is `true` on a hit.
    fn get_or_try_insert<F>(&mut self, key: BlurKey, blur: F) -> Result<(&GrayImage, bool)>
    where
        F: FnOnce() -> Result<GrayImage>,
    {
        let (entry, hit) = match self.entry.take() {
            Some(entry) if entry.key == key => (entry, true),
            _ => (
                BlurEntry {
                    key,
                    plane: blur()?,
                },
                false,
            ),
        };
        Ok((&self.entry.insert(entry).plane, hit))
    }
}

#[derive(Debug, Clone)]
struct LoadedImage {
    source: SourceImage,
    channels: ChannelSet,
}

/// One loaded image, its derived channels and the blur cache.
///
/// Loading replaces everything at once; a failed load keeps the previous
/// image.
#[derive(Debug, Clone, Default)]
pub struct ImageDerivationStore {
    loaded: Option<LoadedImage>,
    blur: BlurCache,
    generation: u64,
}

impl ImageDerivationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source = read_source(path).map_err(|source| ViewerError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        self.replace_source(source)
    }

    /// Installs an already decoded image, deriving its channels.
    pub fn replace_source(&mut self, source: SourceImage) -> Result<()> {
        let channels = ChannelSet::derive(&source)?;
        let (width, height) = source.dimensions();
        info!(
            "loaded {} ({width}x{height}), {} channels derived",
            source.path().display(),
            ChannelId::COUNT
        );
        self.loaded = Some(LoadedImage { source, channels });
        self.generation = self.generation.saturating_add(1);
        self.blur.invalidate();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.loaded = None;
        self.generation = self.generation.saturating_add(1);
        self.blur.invalidate();
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.loaded.as_ref().map(|loaded| &loaded.source)
    }

    pub fn channels(&self) -> Option<&ChannelSet> {
        self.loaded.as_ref().map(|loaded| &loaded.channels)
    }

    /// `(width, height)` of the loaded image.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.source().map(SourceImage::dimensions)
    }

    /// Counter bumped on every load and clear; part of every blur key.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn blur_cache(&self) -> &BlurCache {
        &self.blur
    }

    pub fn get_channel(&self, channel: ChannelId) -> Result<&GrayImage> {
        self.channels()
            .map(|channels| channels.get(channel))
            .ok_or_else(|| ViewerError::UnknownChannel(format!("{channel} (no image loaded)")))
    }

    pub fn get_channel_by_name(&self, name: &str) -> Result<&GrayImage> {
        let channel: ChannelId = name.parse()?;
        self.get_channel(channel)
    }

    /// Blurs `channel` with an odd kernel of `radius` taps and caches the
    /// result, replacing whatever was cached before.
    pub fn apply_blur(&mut self, channel: ChannelId, radius: i32) -> Result<&GrayImage> {
        let radius = odd_at_least("blur radius", radius, 1)?;
        let key = self.blur_key(channel, radius);
        let blurred = gaussian_blur(self.get_channel(channel)?, radius)?;
        Ok(self.blur.store(key, blurred))
    }

    /// Cached blurred plane for `channel` at `radius` of the current image.
    pub fn cached_blur(&self, channel: ChannelId, radius: u32) -> Option<&GrayImage> {
        self.blur.get(&self.blur_key(channel, radius))
    }

    pub fn invalidate_blur(&mut self) {
        self.blur.invalidate();
    }

    pub(crate) fn blurred_channel(
        &mut self,
        channel: ChannelId,
        radius: u32,
    ) -> Result<(&GrayImage, bool)> {
        let key = self.blur_key(channel, radius);
        let loaded = self.loaded.as_ref().ok_or(ViewerError::NoImageLoaded)?;
        let plane = loaded.channels.get(channel);
        self.blur
            .get_or_try_insert(key, || Ok(gaussian_blur(plane, radius)?))
    }

    fn blur_key(&self, channel: ChannelId, radius: u32) -> BlurKey {
        BlurKey {
            channel,
            generation: self.generation,
            radius,
        }
    }
}
