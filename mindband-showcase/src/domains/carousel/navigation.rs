//! Wrap-around step function for arrow navigation.

use super::state::CarouselState;
use super::types::{CarouselError, Direction};

/// Move the window one item in `direction`, wrapping at both ends.
///
/// Stepping before the first window lands on the last valid start and
/// stepping past the last one lands on `0`. When every item already fits the
/// only valid start is `0`, so the result is always `0`. A degenerate layout
/// is rejected and the caller keeps the previous state.
pub fn advance(
    direction: Direction,
    state: CarouselState,
) -> Result<CarouselState, CarouselError> {
    if state.is_degenerate() {
        return Err(CarouselError::DegenerateLayout {
            visible_count: state.visible_count,
            item_width: state.item_width,
        });
    }

    if state.fits_entirely() {
        return Ok(CarouselState {
            current_index: 0,
            ..state
        });
    }

    let max_start = state.max_start_index();
    let candidate = state.current_index as isize + direction.step();
    let next = if candidate < 0 {
        max_start
    } else if candidate as usize > max_start {
        0
    } else {
        candidate as usize
    };

    Ok(CarouselState {
        current_index: next,
        ..state
    })
}
