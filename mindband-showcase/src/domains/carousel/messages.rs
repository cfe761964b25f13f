//! Local message types for carousel interactions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselMessage {
    // Navigation
    Arrow(super::types::Direction),
    /// Raw click on a control, identified by its element id.
    ArrowClicked(String),

    // Viewport
    Resized,
}
