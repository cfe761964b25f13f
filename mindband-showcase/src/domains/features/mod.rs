//! Feature showcase: which description is shown for the last clicked face.

pub mod catalog;
pub mod heading;
pub mod projector;
pub mod registry;

pub use heading::format_heading;
pub use projector::{ContentProjector, compose};
pub use registry::{FeatureError, FeatureRegistry};
