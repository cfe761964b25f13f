//! In-memory carousel track used by the CLI driver and tests.

use std::time::Duration;

use mindband_contracts::{CarouselTrack, Transition};

use super::animator::SnapAnimator;

/// One recorded `translate_x` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftRequest {
    pub x: f32,
    pub transition: Transition,
    /// Surface clock time at which the request arrived.
    pub at: Duration,
}

/// Carousel track with settable geometry and a manual clock.
///
/// Every shift is recorded. Overlapping animated shifts are resolved the
/// way a browser resolves CSS transitions: the new tween starts from the
/// position currently on screen and the old one is dropped.
#[derive(Debug, Clone)]
pub struct HeadlessTrack {
    viewport_width: u32,
    item_width: f32,
    clock: Duration,
    animator: SnapAnimator,
    shifts: Vec<ShiftRequest>,
}

impl HeadlessTrack {
    pub fn new(viewport_width: u32, item_width: f32) -> Self {
        Self {
            viewport_width,
            item_width,
            clock: Duration::ZERO,
            animator: SnapAnimator::new(),
            shifts: Vec::new(),
        }
    }

    /// Simulate a window resize. The caller still has to notify the
    /// carousel, as a browser would fire a `resize` event.
    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    pub fn set_item_width(&mut self, width: f32) {
        self.item_width = width;
    }

    pub fn advance_clock(&mut self, by: Duration) {
        self.clock += by;
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Translation currently on screen.
    pub fn current_x(&mut self) -> f32 {
        self.animator.sample(self.clock)
    }

    /// Translation the track is heading towards.
    pub fn target_x(&self) -> f32 {
        self.animator.target()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    pub fn shifts(&self) -> &[ShiftRequest] {
        &self.shifts
    }

    pub fn last_shift(&self) -> Option<&ShiftRequest> {
        self.shifts.last()
    }
}

impl CarouselTrack for HeadlessTrack {
    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    fn item_width(&self) -> f32 {
        self.item_width
    }

    fn translate_x(&mut self, x: f32, transition: Transition) {
        let from = self.animator.sample(self.clock);
        self.animator.start(self.clock, from, x, transition);
        self.shifts.push(ShiftRequest {
            x,
            transition,
            at: self.clock,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindband_contracts::EasingKind;

    #[test]
    fn later_request_wins_mid_animation() {
        let mut track = HeadlessTrack::new(1280, 300.0);
        let linear = Transition::animated(500, EasingKind::Linear);

        track.translate_x(-300.0, linear);
        track.advance_clock(Duration::from_millis(250));
        assert_eq!(track.current_x(), -150.0);

        track.translate_x(-600.0, linear);
        assert_eq!(track.target_x(), -600.0);
        track.advance_clock(Duration::from_millis(250));
        assert_eq!(track.current_x(), -375.0);
        track.advance_clock(Duration::from_millis(250));
        assert_eq!(track.current_x(), -600.0);
        assert_eq!(track.shifts().len(), 2);
    }

    #[test]
    fn immediate_shift_lands_at_once() {
        let mut track = HeadlessTrack::new(1280, 300.0);
        track.translate_x(-900.0, Transition::Immediate);
        assert_eq!(track.current_x(), -900.0);
        assert!(!track.is_animating());
    }
}
