mod api;
mod error;
mod raster;
mod util;


pub use api::{is_supported_image_path, read_source, supported_formats, write_plane};
pub use error::{IoError, Result};
