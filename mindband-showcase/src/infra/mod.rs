pub mod constants;
pub mod logging;
pub mod runtime_config;
pub mod surfaces;

pub use runtime_config::{ConfigLoadError, RuntimeConfig};
