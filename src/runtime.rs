mod error;
mod params;
mod session;
mod store;

#[cfg(test)]
mod tests;

pub use error::{Result, ViewerError};
pub use params::{
    DEFAULT_BLOCK_SIZE, DEFAULT_BLUR_RADIUS, DEFAULT_CONSTANT_C, DEFAULT_THRESHOLD,
    RenderParameters,
};
pub use session::{RenderOutput, RenderSession};
pub use store::{BlurCache, BlurKey, ChannelSet, ImageDerivationStore};
