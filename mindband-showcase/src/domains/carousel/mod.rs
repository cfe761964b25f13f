//! Watch-face carousel
//!
//! A wrap-around, breakpoint-responsive slider. Pure decision functions
//! (classification, stepping, resize repositioning, offset arithmetic) live
//! in their own modules and are composed by [`CarouselController`], which is
//! the only owner of the mutable [`CarouselState`].

pub mod controller;
pub mod messages;
pub mod navigation;
pub mod resize;
pub mod state;
pub mod transform;
pub mod types;
pub mod viewport;

pub use controller::CarouselController;
pub use messages::CarouselMessage;
pub use state::CarouselState;
pub use transform::TransformApplier;
pub use types::*;
pub use viewport::{Breakpoint, Breakpoints, classify};
