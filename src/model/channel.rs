use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ModelError;

/// One of the seven planes derived from a loaded RGB image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChannelId {
    #[default]
    #[serde(alias = "grayscale_image")]
    Grayscale,
    #[serde(alias = "red_channel")]
    Red,
    #[serde(alias = "green_channel")]
    Green,
    #[serde(alias = "blue_channel")]
    Blue,
    #[serde(alias = "hue_channel")]
    Hue,
    #[serde(alias = "saturation_channel")]
    Saturation,
    #[serde(alias = "brightness_channel")]
    Brightness,
}

impl ChannelId {
    pub const COUNT: usize = 7;

    pub const ALL: [ChannelId; Self::COUNT] = [
        ChannelId::Grayscale,
        ChannelId::Red,
        ChannelId::Green,
        ChannelId::Blue,
        ChannelId::Hue,
        ChannelId::Saturation,
        ChannelId::Brightness,
    ];

    /// Position of this channel inside a fully populated channel set.
    pub const fn index(self) -> usize {
        match self {
            ChannelId::Grayscale => 0,
            ChannelId::Red => 1,
            ChannelId::Green => 2,
            ChannelId::Blue => 3,
            ChannelId::Hue => 4,
            ChannelId::Saturation => 5,
            ChannelId::Brightness => 6,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ChannelId::Grayscale => "grayscale",
            ChannelId::Red => "red",
            ChannelId::Green => "green",
            ChannelId::Blue => "blue",
            ChannelId::Hue => "hue",
            ChannelId::Saturation => "saturation",
            ChannelId::Brightness => "brightness",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ChannelId::Grayscale => "Grayscale",
            ChannelId::Red => "Red",
            ChannelId::Green => "Green",
            ChannelId::Blue => "Blue",
            ChannelId::Hue => "Hue",
            ChannelId::Saturation => "Saturation",
            ChannelId::Brightness => "Brightness",
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ChannelId {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let stem = normalized
            .strip_suffix("_image")
            .or_else(|| normalized.strip_suffix("_channel"))
            .unwrap_or(&normalized);
        ChannelId::ALL
            .into_iter()
            .find(|channel| channel.as_str() == stem)
            .ok_or_else(|| ModelError::UnknownChannel(value.to_string()))
    }
}
