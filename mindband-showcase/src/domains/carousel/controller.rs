//! Carousel controller: owns the state and the track it drives.
//!
//! Arrow presses and viewport resizes are the only two event sources that
//! touch [`CarouselState`]. Both run to completion on the UI thread, so the
//! controller needs no locking. The state is always committed before the
//! track is asked to move.

use mindband_contracts::CarouselTrack;
use tracing::{debug, warn};

use super::messages::CarouselMessage;
use super::navigation;
use super::resize;
use super::state::CarouselState;
use super::transform::TransformApplier;
use super::types::{CarouselUpdate, Direction, NavigationOutcome, ResizePolicy};
use super::viewport::Breakpoints;
use crate::infra::runtime_config::RuntimeConfig;

#[derive(Debug)]
pub struct CarouselController<T> {
    state: CarouselState,
    track: T,
    applier: TransformApplier,
    breakpoints: Breakpoints,
    resize_policy: ResizePolicy,
}

impl<T: CarouselTrack> CarouselController<T> {
    /// Create a controller for `total_items` items, measuring the initial
    /// layout from `track`.
    pub fn new(track: T, total_items: usize, config: &RuntimeConfig) -> Self {
        let breakpoints = config.breakpoints();
        let state = CarouselState::new(
            total_items,
            breakpoints.classify(track.viewport_width()),
            track.item_width(),
        );
        debug!(?state, "carousel initialised");
        Self {
            state,
            track,
            applier: TransformApplier::new(config.navigation_transition()),
            breakpoints,
            resize_policy: config.resize_policy(),
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut T {
        &mut self.track
    }

    pub fn resize_policy(&self) -> ResizePolicy {
        self.resize_policy
    }

    /// Current layout metrics as reported by the track.
    fn measure(&self) -> (usize, f32) {
        (
            self.breakpoints.classify(self.track.viewport_width()),
            self.track.item_width(),
        )
    }

    /// Handle an arrow press.
    ///
    /// Layout is re-measured first so the step uses live geometry. A
    /// degenerate layout leaves the index untouched and issues no shift.
    pub fn advance(&mut self, direction: Direction) -> NavigationOutcome {
        let (visible, item_width) = self.measure();
        let measured = self.state.with_layout(visible, item_width);

        match navigation::advance(direction, measured) {
            Ok(next) => {
                self.state = next;
                let offset = self.applier.apply(
                    &mut self.track,
                    next.current_index,
                    next.item_width,
                );
                debug!(%direction, index = next.current_index, offset, "carousel advanced");
                NavigationOutcome::Moved {
                    index: next.current_index,
                    offset,
                }
            }
            Err(err) => {
                // Keep the fresh metrics, never the index.
                self.state = measured;
                warn!(%direction, error = %err, "carousel navigation suppressed");
                NavigationOutcome::Suppressed(err)
            }
        }
    }

    /// Handle a viewport resize: re-classify, re-measure, reposition
    /// according to the resize policy and jump the track there.
    pub fn on_resize(&mut self) -> CarouselState {
        let (visible, item_width) = self.measure();
        let next =
            resize::resized(self.state, visible, item_width, self.resize_policy);
        self.state = next;

        // A degenerate layout always lands on window 0; never multiply by a
        // non-finite width.
        let item_width = if next.is_degenerate() { 0.0 } else { next.item_width };
        self.applier
            .apply_immediate(&mut self.track, next.current_index, item_width);
        debug!(
            visible,
            item_width,
            index = next.current_index,
            policy = ?self.resize_policy,
            "carousel relaid after resize"
        );
        next
    }

    /// Message-driven entry point used by the application update loop.
    pub fn update(&mut self, message: CarouselMessage) -> CarouselUpdate {
        match message {
            CarouselMessage::Arrow(direction) => {
                CarouselUpdate::Navigated(self.advance(direction))
            }
            CarouselMessage::ArrowClicked(control_id) => {
                match Direction::from_control_id(&control_id) {
                    Some(direction) => {
                        CarouselUpdate::Navigated(self.advance(direction))
                    }
                    None => {
                        debug!(%control_id, "ignoring click on unknown control");
                        CarouselUpdate::Ignored
                    }
                }
            }
            CarouselMessage::Resized => CarouselUpdate::Relaid(self.on_resize()),
        }
    }
}
