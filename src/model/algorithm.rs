use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ModelError;

/// Binarization algorithm applied by a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "GLOBAL_THRESH")]
    GlobalThresh,
    #[serde(rename = "ADAPTIVE_THRESH_MEAN_C")]
    AdaptiveMean,
    #[serde(rename = "ADAPTIVE_THRESH_GAUSSIAN_C")]
    AdaptiveGaussian,
    #[serde(rename = "OTSU_THRESH")]
    Otsu,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::GlobalThresh,
        Algorithm::AdaptiveMean,
        Algorithm::AdaptiveGaussian,
        Algorithm::Otsu,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            Algorithm::GlobalThresh => "GLOBAL_THRESH",
            Algorithm::AdaptiveMean => "ADAPTIVE_THRESH_MEAN_C",
            Algorithm::AdaptiveGaussian => "ADAPTIVE_THRESH_GAUSSIAN_C",
            Algorithm::Otsu => "OTSU_THRESH",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Algorithm::GlobalThresh => "Global threshold",
            Algorithm::AdaptiveMean => "Adaptive mean",
            Algorithm::AdaptiveGaussian => "Adaptive Gaussian",
            Algorithm::Otsu => "Otsu",
        }
    }

    /// Whether the fixed threshold level takes part in this algorithm.
    pub const fn uses_threshold_level(self) -> bool {
        matches!(self, Algorithm::GlobalThresh)
    }

    pub const fn is_adaptive(self) -> bool {
        matches!(self, Algorithm::AdaptiveMean | Algorithm::AdaptiveGaussian)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase().replace('-', "_");
        let alias = match normalized.as_str() {
            "GLOBAL" => Some(Algorithm::GlobalThresh),
            "MEAN" | "ADAPTIVE_MEAN" => Some(Algorithm::AdaptiveMean),
            "GAUSSIAN" | "ADAPTIVE_GAUSSIAN" => Some(Algorithm::AdaptiveGaussian),
            "OTSU" => Some(Algorithm::Otsu),
            _ => None,
        };
        alias
            .or_else(|| {
                Algorithm::ALL
                    .into_iter()
                    .find(|algorithm| algorithm.tag() == normalized)
            })
            .ok_or_else(|| ModelError::UnknownAlgorithm(value.to_string()))
    }
}
