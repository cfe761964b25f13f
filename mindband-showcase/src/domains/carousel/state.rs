//! CarouselState: window position and the layout it was computed against

/// Window start plus the geometry needed to turn it into a pixel offset.
///
/// Invariant after every navigation or resize:
/// `0 <= current_index <= max_start_index()`, where the upper bound is
/// `total_items - visible_count` and collapses to `0` when everything fits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    pub current_index: usize,
    /// Fixed once the items are loaded.
    pub total_items: usize,
    pub visible_count: usize,
    pub item_width: f32,
}

impl CarouselState {
    pub fn new(total_items: usize, visible_count: usize, item_width: f32) -> Self {
        Self {
            current_index: 0,
            total_items,
            visible_count,
            item_width,
        }
    }

    /// Last valid window start.
    #[inline]
    pub fn max_start_index(&self) -> usize {
        self.total_items.saturating_sub(self.visible_count)
    }

    /// True when the layout cannot produce a meaningful offset.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.visible_count == 0
            || !self.item_width.is_finite()
            || self.item_width <= 0.0
    }

    /// Whether every item fits on screen, leaving nothing to scroll.
    #[inline]
    pub fn fits_entirely(&self) -> bool {
        self.total_items <= self.visible_count
    }

    /// Pixel offset of the current window start.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.current_index as f32 * self.item_width
    }

    /// Copy with new layout metrics; the index is left as is.
    pub fn with_layout(self, visible_count: usize, item_width: f32) -> Self {
        Self {
            visible_count,
            item_width,
            ..self
        }
    }

    /// Copy moved to `index`, clamped into the valid range.
    pub fn with_index(self, index: usize) -> Self {
        Self {
            current_index: index.min(self.max_start_index()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_start_never_underflows() {
        assert_eq!(CarouselState::new(7, 4, 300.0).max_start_index(), 3);
        assert_eq!(CarouselState::new(2, 4, 300.0).max_start_index(), 0);
        assert_eq!(CarouselState::new(0, 1, 300.0).max_start_index(), 0);
    }

    #[test]
    fn degenerate_layouts() {
        assert!(CarouselState::new(7, 0, 300.0).is_degenerate());
        assert!(CarouselState::new(7, 4, 0.0).is_degenerate());
        assert!(CarouselState::new(7, 4, f32::NAN).is_degenerate());
        assert!(!CarouselState::new(7, 4, 1.0).is_degenerate());
    }

    #[test]
    fn with_index_clamps() {
        let state = CarouselState::new(7, 4, 250.0).with_index(9);
        assert_eq!(state.current_index, 3);
        assert_eq!(state.offset(), 750.0);
    }
}
