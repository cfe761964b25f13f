//! Presentation-layer snapshot of the model surface.

pub use super::colour::Colour;
pub use super::content::ContentNode;
pub use super::error::ModelError;
pub use super::feature::{FeatureRecord, IconToken};
pub use super::ids::ItemId;
