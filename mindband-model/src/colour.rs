//! Display colour values as written in stylesheets (`#rgb` / `#rrggbb`).

use std::fmt;

use crate::error::ModelError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Colour(String);

impl Colour {
    /// Parse a hex colour. The original spelling (case, short form) is kept
    /// so that rendered output matches the source stylesheet exactly.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ModelError> {
        let raw = raw.into();
        let valid = raw
            .strip_prefix('#')
            .filter(|hex| matches!(hex.len(), 3 | 6))
            .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()));
        if !valid {
            return Err(ModelError::InvalidColour(raw));
        }
        Ok(Colour(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Colour {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::parse(value)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.0
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_long_and_short_hex() {
        assert!(Colour::parse("#FF5D6D").is_ok());
        assert!(Colour::parse("#333").is_ok());
    }

    #[test]
    fn preserves_spelling() {
        assert_eq!(Colour::parse("#d58dff").unwrap().as_str(), "#d58dff");
    }

    #[test]
    fn rejects_malformed_values() {
        for raw in ["FF5D6D", "#FF5D6", "#GGGGGG", "", "#"] {
            assert!(Colour::parse(raw).is_err(), "{raw} should be rejected");
        }
    }
}
