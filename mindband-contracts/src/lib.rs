//! Trait surfaces describing the display collaborators driven by the showcase.
//!
//! The showcase never touches a rendering toolkit directly. It asks a
//! [`CarouselTrack`] to move and measure, and a [`ContentRegion`] to be
//! cleared and refilled. Any backend (browser bindings, a terminal renderer,
//! the in-memory surfaces used by tests) implements these two traits.

pub mod surface;
pub mod transition;

pub use surface::{CarouselTrack, ContentRegion};
pub use transition::{EasingKind, Transition};

/// Frequently used traits and values for surface implementors.
pub mod prelude {
    pub use super::surface::{CarouselTrack, ContentRegion};
    pub use super::transition::{EasingKind, Transition};
    pub use mindband_model::prelude::*;
}
