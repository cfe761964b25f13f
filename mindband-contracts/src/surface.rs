//! Display surfaces consumed by the carousel and the content projector.

use mindband_model::ContentNode;

use crate::transition::Transition;

/// Horizontally scrolling container holding the carousel items.
pub trait CarouselTrack {
    /// Current viewport width in CSS pixels.
    fn viewport_width(&self) -> u32;

    /// Rendered width of a single item in pixels. `0.0` means layout has not
    /// produced usable geometry yet.
    fn item_width(&self) -> f32;

    /// Shift the container horizontally to `x` pixels (negative moves the
    /// content left). A request issued while a previous transition is still
    /// running replaces it; requests are never queued.
    fn translate_x(&mut self, x: f32, transition: Transition);
}

/// Region that displays the description of the selected item.
pub trait ContentRegion {
    /// Remove every node currently displayed.
    fn clear(&mut self);

    /// Append one node after the existing ones.
    fn append(&mut self, node: ContentNode);
}

impl<T: CarouselTrack + ?Sized> CarouselTrack for &mut T {
    fn viewport_width(&self) -> u32 {
        (**self).viewport_width()
    }

    fn item_width(&self) -> f32 {
        (**self).item_width()
    }

    fn translate_x(&mut self, x: f32, transition: Transition) {
        (**self).translate_x(x, transition)
    }
}

impl<R: ContentRegion + ?Sized> ContentRegion for &mut R {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn append(&mut self, node: ContentNode) {
        (**self).append(node)
    }
}
