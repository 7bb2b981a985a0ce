use std::ops::RangeInclusive;

use crate::model::Algorithm;
use crate::runtime::{self, RenderParameters, RenderSession};

const MAX_BLUR_SLIDER: i32 = 99;

/// A numeric control shown under the images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SliderKind {
    Threshold,
    BlockSize,
    ConstantC,
    BlurRadius,
}

impl SliderKind {
    pub(super) fn range(self) -> RangeInclusive<i32> {
        match self {
            SliderKind::Threshold => 0..=255,
            SliderKind::BlockSize => 3..=255,
            SliderKind::ConstantC => 1..=255,
            SliderKind::BlurRadius => 1..=MAX_BLUR_SLIDER,
        }
    }

    pub(super) fn label(self, value: i32) -> String {
        let name = match self {
            SliderKind::Threshold => "Pixel Threshold",
            SliderKind::BlockSize => "Block Size",
            SliderKind::ConstantC => "Constant C",
            SliderKind::BlurRadius => "Blur Value",
        };
        format!("{name}: {value}")
    }

    /// Increment between two accepted values.
    pub(super) fn step(self) -> f64 {
        match self {
            SliderKind::BlockSize | SliderKind::BlurRadius => 2.0,
            SliderKind::Threshold | SliderKind::ConstantC => 1.0,
        }
    }

    /// Moves `value` onto one the renderer accepts. Even values of the odd
    /// sliders move further in the direction of travel from `previous`.
    pub(super) fn snap(self, value: i32, previous: i32) -> i32 {
        let range = self.range();
        let (low, high) = (*range.start(), *range.end());
        let value = value.clamp(low, high);
        match self {
            SliderKind::BlockSize | SliderKind::BlurRadius if value % 2 == 0 => {
                let moved = if value < previous { value - 1 } else { value + 1 };
                if (low..=high).contains(&moved) {
                    moved
                } else if moved < low {
                    value + 1
                } else {
                    value - 1
                }
            }
            _ => value,
        }
    }

    pub(super) fn current(self, params: &RenderParameters) -> i32 {
        match self {
            SliderKind::Threshold => i32::from(params.threshold()),
            SliderKind::BlockSize => params.block_size() as i32,
            SliderKind::ConstantC => params.constant_c(),
            SliderKind::BlurRadius => params.blur_radius() as i32,
        }
    }

    pub(super) fn apply(self, session: &mut RenderSession, value: i32) -> runtime::Result<()> {
        let value = self.snap(value, self.current(session.params()));
        match self {
            SliderKind::Threshold => session.set_threshold(value),
            SliderKind::BlockSize => session.set_block_size(value),
            SliderKind::ConstantC => session.set_constant_c(value),
            SliderKind::BlurRadius => session.set_blur_radius(value),
        }
    }
}

/// Sliders relevant to `algorithm`; the blur slider only while blur is on.
pub(super) fn visible_sliders(algorithm: Algorithm, blur_enabled: bool) -> Vec<SliderKind> {
    let mut sliders = Vec::new();
    if algorithm.uses_threshold_level() {
        sliders.push(SliderKind::Threshold);
    }
    if algorithm.is_adaptive() {
        sliders.extend([SliderKind::BlockSize, SliderKind::ConstantC]);
    }
    if blur_enabled {
        sliders.push(SliderKind::BlurRadius);
    }
    sliders
}
