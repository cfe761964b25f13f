//! Core data model definitions shared across MindBand crates.
#![allow(missing_docs)]

pub mod colour;
pub mod content;
pub mod error;
pub mod feature;
pub mod ids;
pub mod prelude;

pub use colour::Colour;
pub use content::ContentNode;
pub use error::ModelError;
pub use feature::{FeatureRecord, IconToken};
pub use ids::ItemId;
