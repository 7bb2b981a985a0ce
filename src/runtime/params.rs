use serde::Serialize;

use crate::model::{Algorithm, ChannelId};

use super::{Result, ViewerError};

pub const DEFAULT_THRESHOLD: u8 = 127;
pub const DEFAULT_BLOCK_SIZE: u32 = 11;
pub const DEFAULT_CONSTANT_C: i32 = 1;
pub const DEFAULT_BLUR_RADIUS: u32 = 5;

const CONSTANT_C_LIMIT: i32 = 255;

/// Everything the user can tune between two renders.
///
/// Setters validate before writing, so a rejected value leaves the previous
/// state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderParameters {
    channel: ChannelId,
    algorithm: Algorithm,
    threshold: u8,
    block_size: u32,
    constant_c: i32,
    blur_radius: u32,
    blur_enabled: bool,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            channel: ChannelId::Grayscale,
            algorithm: Algorithm::GlobalThresh,
            threshold: DEFAULT_THRESHOLD,
            block_size: DEFAULT_BLOCK_SIZE,
            constant_c: DEFAULT_CONSTANT_C,
            blur_radius: DEFAULT_BLUR_RADIUS,
            blur_enabled: false,
        }
    }
}

impl RenderParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn constant_c(&self) -> i32 {
        self.constant_c
    }

    pub fn blur_radius(&self) -> u32 {
        self.blur_radius
    }

    pub fn blur_enabled(&self) -> bool {
        self.blur_enabled
    }

    pub fn set_channel(&mut self, channel: ChannelId) {
        self.channel = channel;
    }

    pub fn set_channel_by_name(&mut self, name: &str) -> Result<()> {
        let channel: ChannelId = name.parse()?;
        self.channel = channel;
        Ok(())
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn set_algorithm_by_tag(&mut self, tag: &str) -> Result<()> {
        let algorithm: Algorithm = tag.parse()?;
        self.algorithm = algorithm;
        Ok(())
    }

    pub fn set_threshold(&mut self, value: i32) -> Result<()> {
        self.threshold = u8::try_from(value).map_err(|_| {
            ViewerError::InvalidParameter(format!(
                "threshold must be within 0..=255, got {value}"
            ))
        })?;
        Ok(())
    }

    /// Even block sizes are rejected rather than rounded.
    pub fn set_block_size(&mut self, value: i32) -> Result<()> {
        self.block_size = odd_at_least("block size", value, 3)?;
        Ok(())
    }

    pub fn set_constant_c(&mut self, value: i32) -> Result<()> {
        if !(-CONSTANT_C_LIMIT..=CONSTANT_C_LIMIT).contains(&value) {
            return Err(ViewerError::InvalidParameter(format!(
                "constant C must be within -{CONSTANT_C_LIMIT}..={CONSTANT_C_LIMIT}, got {value}"
            )));
        }
        self.constant_c = value;
        Ok(())
    }

    pub fn set_blur_radius(&mut self, value: i32) -> Result<()> {
        self.blur_radius = odd_at_least("blur radius", value, 1)?;
        Ok(())
    }

    pub fn set_blur_enabled(&mut self, enabled: bool) {
        self.blur_enabled = enabled;
    }
}

pub(crate) fn odd_at_least(name: &str, value: i32, minimum: i32) -> Result<u32> {
    if value < minimum || value % 2 == 0 {
        return Err(ViewerError::InvalidParameter(format!(
            "{name} must be an odd integer >= {minimum}, got {value}"
        )));
    }
    Ok(value as u32)
}
