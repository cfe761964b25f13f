//! Shared types for the carousel domain

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::infra::constants::carousel::controls;

/// Arrow direction. Backward moves the window towards the first item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// Signed index delta: -1 or +1.
    pub fn step(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }

    /// Map an arrow control id (`left-arrow` / `right-arrow`) to a direction.
    pub fn from_control_id(id: &str) -> Option<Self> {
        match id {
            controls::LEFT_ARROW_ID => Some(Direction::Backward),
            controls::RIGHT_ARROW_ID => Some(Direction::Forward),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Backward => write!(f, "backward"),
            Direction::Forward => write!(f, "forward"),
        }
    }
}

/// Policy applied to the window start when the viewport is resized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizePolicy {
    /// Jump back to the first item (the page's historical behaviour).
    #[default]
    Reset,
    /// Keep the current item, clamped into the new valid range.
    Clamp,
}

impl FromStr for ResizePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reset" => Ok(ResizePolicy::Reset),
            "clamp" => Ok(ResizePolicy::Clamp),
            other => Err(format!(
                "unknown resize policy '{other}' (expected 'reset' or 'clamp')"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CarouselError {
    /// Layout reported no visible items or a non-positive item width.
    #[error(
        "degenerate layout: {visible_count} visible item(s), item width {item_width}px"
    )]
    DegenerateLayout {
        visible_count: usize,
        item_width: f32,
    },
}

/// Result of one arrow press as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationOutcome {
    /// State updated and a shift to `offset` requested.
    Moved { index: usize, offset: f32 },
    /// Layout unusable; index left unchanged and no shift requested.
    Suppressed(CarouselError),
}

impl NavigationOutcome {
    pub fn index(&self) -> Option<usize> {
        match self {
            NavigationOutcome::Moved { index, .. } => Some(*index),
            NavigationOutcome::Suppressed(_) => None,
        }
    }
}

/// What a [`CarouselMessage`](super::CarouselMessage) did to the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselUpdate {
    Navigated(NavigationOutcome),
    Relaid(super::state::CarouselState),
    /// Click on an element that is not an arrow control.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_ids_map_to_directions() {
        assert_eq!(
            Direction::from_control_id("left-arrow"),
            Some(Direction::Backward)
        );
        assert_eq!(
            Direction::from_control_id("right-arrow"),
            Some(Direction::Forward)
        );
        assert_eq!(Direction::from_control_id("up-arrow"), None);
    }

    #[test]
    fn resize_policy_parses_case_insensitively() {
        assert_eq!("Clamp".parse(), Ok(ResizePolicy::Clamp));
        assert_eq!(" reset ".parse(), Ok(ResizePolicy::Reset));
        assert!("keep".parse::<ResizePolicy>().is_err());
    }
}
