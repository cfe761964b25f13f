//! Converts a window start into a track shift request.

use mindband_contracts::{CarouselTrack, Transition};
use tracing::debug;

/// Horizontal pixel offset of window start `index`.
#[inline]
pub fn offset_for(index: usize, item_width: f32) -> f32 {
    index as f32 * item_width
}

/// Issues shift requests to the track with a configured navigation transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformApplier {
    transition: Transition,
}

impl TransformApplier {
    pub fn new(transition: Transition) -> Self {
        Self { transition }
    }

    /// Animate the track to window start `index`. Returns the offset used.
    pub fn apply<T: CarouselTrack + ?Sized>(
        &self,
        track: &mut T,
        index: usize,
        item_width: f32,
    ) -> f32 {
        self.shift(track, offset_for(index, item_width), self.transition)
    }

    /// Jump the track to window start `index` without animating.
    pub fn apply_immediate<T: CarouselTrack + ?Sized>(
        &self,
        track: &mut T,
        index: usize,
        item_width: f32,
    ) -> f32 {
        self.shift(track, offset_for(index, item_width), Transition::Immediate)
    }

    fn shift<T: CarouselTrack + ?Sized>(
        &self,
        track: &mut T,
        offset: f32,
        transition: Transition,
    ) -> f32 {
        // The container moves left as the window advances.
        let x = if offset == 0.0 { 0.0 } else { -offset };
        debug!(offset, ?transition, "shifting carousel track");
        track.translate_x(x, transition);
        offset
    }
}
