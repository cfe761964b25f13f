//! Carousel constants
//!
//! Breakpoints and transition defaults for the watch-face carousel. Tuning
//! should happen here (or through `RuntimeConfig` overrides) so the
//! classifier, the navigation path and the resize path stay consistent.

/// Viewport breakpoints used to decide how many watch faces fit on screen.
pub mod breakpoints {
    /// Inclusive upper bound (px) paired with the visible count at or below
    /// it. Ascending; the first matching row wins.
    pub const TABLE: [(u32, usize); 3] = [
        (620, 1),  // small phones
        (768, 2),  // phones and small tablets
        (1024, 3), // large tablets and small desktops
    ];
    /// Visible count for anything wider than the last breakpoint.
    pub const WIDE_VISIBLE: usize = 4;
}

/// Timing of the track shift issued after an arrow click.
pub mod transition {
    /// Duration (ms) of the animated shift.
    pub const DURATION_MS: u64 = 500;
    /// Easing keyword for the shift, matches the stylesheet `ease`.
    pub const EASING: &str = "ease";
    /// Upper bound accepted from configuration (ms).
    pub const MAX_DURATION_MS: u64 = 10_000;
}

/// Identifiers of the arrow controls flanking the carousel.
pub mod controls {
    pub const LEFT_ARROW_ID: &str = "left-arrow";
    pub const RIGHT_ARROW_ID: &str = "right-arrow";
}
