mod error;
mod io;
mod spec;


pub use error::{PresetError, Result};
pub use io::load_preset;
pub use spec::PresetSpec;
