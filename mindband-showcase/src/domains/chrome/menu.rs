//! Burger menu toggle.

use std::time::Duration;

use crate::infra::constants::chrome::menu;

/// Animation played on both burger bars after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarAnimation {
    pub name: &'static str,
    pub duration: Duration,
    /// Bars keep their final keyframe once the animation ends.
    pub fill_forwards: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Set the checked state and return the bar animation to play.
    pub fn set_open(&mut self, open: bool) -> BarAnimation {
        self.open = open;
        let name = if open {
            menu::OPENING_ANIMATION
        } else {
            menu::CLOSING_ANIMATION
        };
        BarAnimation {
            name,
            duration: Duration::from_millis(menu::ANIMATION_MS),
            fill_forwards: true,
        }
    }

    pub fn toggle(&mut self) -> BarAnimation {
        self.set_open(!self.open)
    }
}
