//! State transition applied when the viewport changes size.

use super::state::CarouselState;
use super::types::ResizePolicy;

/// Re-derive layout metrics and reposition the window.
///
/// `Reset` always returns to the first window; position is lost on every
/// resize. `Clamp` keeps the current start when it is still valid for the
/// new visible count and otherwise pins it to the last valid start.
///
/// A degenerate layout has no meaningful offset, so both policies fall back
/// to the first window and the track is shifted to 0 along with the state.
pub fn resized(
    state: CarouselState,
    visible_count: usize,
    item_width: f32,
    policy: ResizePolicy,
) -> CarouselState {
    let relaid = state.with_layout(visible_count, item_width);
    if relaid.is_degenerate() {
        return relaid.with_index(0);
    }
    match policy {
        ResizePolicy::Reset => relaid.with_index(0),
        ResizePolicy::Clamp => relaid.with_index(relaid.current_index),
    }
}
