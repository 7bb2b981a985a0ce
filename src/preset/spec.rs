use serde::Deserialize;

use crate::runtime::RenderParameters;

use super::Result;

/// Render parameters read from a preset file. Every field is optional; missing ones
/// keep their defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PresetSpec {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub threshold: Option<i32>,
    #[serde(default)]
    pub block_size: Option<i32>,
    #[serde(default)]
    pub constant_c: Option<i32>,
    #[serde(default)]
    pub blur_radius: Option<i32>,
    #[serde(default)]
    pub blur_enabled: Option<bool>,
}

impl PresetSpec {
    /// Applies the preset on top of `base`, validating every field.
    pub fn apply_to(&self, base: &RenderParameters) -> Result<RenderParameters> {
        let mut params = base.clone();
        if let Some(channel) = &self.channel {
            params.set_channel_by_name(channel)?;
        }
        if let Some(algorithm) = &self.algorithm {
            params.set_algorithm_by_tag(algorithm)?;
        }
        if let Some(threshold) = self.threshold {
            params.set_threshold(threshold)?;
        }
        if let Some(block_size) = self.block_size {
            params.set_block_size(block_size)?;
        }
        if let Some(constant_c) = self.constant_c {
            params.set_constant_c(constant_c)?;
        }
        if let Some(blur_radius) = self.blur_radius {
            params.set_blur_radius(blur_radius)?;
        }
        if let Some(blur_enabled) = self.blur_enabled {
            params.set_blur_enabled(blur_enabled);
        }
        Ok(params)
    }

    pub fn into_parameters(self) -> Result<RenderParameters> {
        self.apply_to(&RenderParameters::default())
    }
}
