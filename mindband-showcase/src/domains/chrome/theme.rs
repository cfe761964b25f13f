//! Light/dark theme switch
//!
//! The switch rewrites a fixed set of CSS custom properties and swaps the
//! hand-drawn illustrations for their dark variants.

use std::fmt;

use crate::infra::constants::chrome::{artwork, palette};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Mode selected by the switch's checked state.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    pub fn palette(self) -> Palette {
        let values = match self {
            Self::Light => palette::LIGHT,
            Self::Dark => palette::DARK,
        };
        Palette {
            entries: palette::VARIABLES.into_iter().zip(values).collect(),
        }
    }

    /// `(element id, image source)` for every themed illustration.
    pub fn artwork(self) -> Vec<(&'static str, String)> {
        let suffix = match self {
            Self::Light => "",
            Self::Dark => "-dark",
        };
        artwork::THEMED
            .iter()
            .map(|(element, stem)| {
                (*element, format!("{}/{stem}{suffix}.svg", artwork::IMAGE_DIR))
            })
            .collect()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// CSS custom properties for one theme, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(&'static str, &'static str)>,
}

impl Palette {
    pub fn get(&self, variable: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == variable)
            .map(|(_, value)| *value)
    }

    pub fn entries(&self) -> &[(&'static str, &'static str)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_values() {
        let dark = ThemeMode::Dark.palette();
        assert_eq!(dark.get("--bg-colour"), Some("#2c2b2f"));
        assert_eq!(dark.get("--icon-background"), Some("#333"));
        assert_eq!(dark.entries().len(), 5);
    }

    #[test]
    fn light_palette_values() {
        let light = ThemeMode::Light.palette();
        assert_eq!(light.get("--text-colour-one"), Some("#393346"));
        assert_eq!(light.get("--missing"), None);
    }

    #[test]
    fn artwork_switches_to_dark_variants() {
        let dark = ThemeMode::Dark.artwork();
        assert!(dark.contains(&(
            "green-watches",
            "/images/green-watches-dark.svg".to_string()
        )));
        let light = ThemeMode::Light.artwork();
        assert!(light.contains(&(
            "brain-scribble",
            "/images/brain-scribble.svg".to_string()
        )));
    }

    #[test]
    fn checked_means_dark() {
        assert_eq!(ThemeMode::from_checked(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_checked(false), ThemeMode::Light);
    }
}
