mod algorithm;
mod channel;
mod error;
mod source;


pub use algorithm::Algorithm;
pub use channel::ChannelId;
pub use error::{ModelError, Result};
pub use source::SourceImage;
