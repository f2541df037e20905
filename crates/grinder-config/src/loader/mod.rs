//! Config file loading and creation.

mod format;
mod load;
mod paths;


pub use format::ConfigFormat;
pub use load::{load_default, load_from_path, load_validated};
pub use paths::{create_default_config, default_config_path};
