//! Application-level messages routed by `Showcase::update`.

use mindband_model::ItemId;

use crate::domains::carousel::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseMessage {
    // Carousel
    Arrow(Direction),
    /// Click on a carousel control, identified by its element id.
    ArrowClicked(String),
    Resized,

    // Features
    FaceClicked(ItemId),

    // Chrome
    ThemeToggled(bool),
    MenuToggled,
    DialogShown(String),
    DialogHidden(String),
}
