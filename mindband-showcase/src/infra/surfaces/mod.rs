//! Headless implementations of the display contracts.

pub mod animator;
pub mod headless_track;
pub mod memory_region;

pub use animator::SnapAnimator;
pub use headless_track::{HeadlessTrack, ShiftRequest};
pub use memory_region::MemoryRegion;
