//! Pixel kernels behind the viewer: channel derivation, Gaussian smoothing and
//! the four binarization methods. Every function takes and returns owned
//! 8-bit planes and never touches viewer state.

mod adaptive;
mod color;
mod error;
mod gaussian;
mod threshold;
mod util;


pub use adaptive::{AdaptiveMethod, adaptive_threshold};
pub use color::{derive_channel, hsv_planes, luminance, split_rgb};
pub use error::{OpsError, Result};
pub use gaussian::{gaussian_blur, gaussian_kernel};
pub use threshold::{otsu_level, threshold_binary, threshold_otsu};

use util::{BINARY_MAX, ensure_odd_at_least, plane_from_raw};
