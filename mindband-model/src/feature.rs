//! Display metadata attached to a carousel item.

use std::fmt;

use crate::colour::Colour;
use crate::error::ModelError;

/// Symbolic icon reference, resolved by the presentation layer
/// (e.g. `fa-moon` for an icon font glyph).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct IconToken(String);

impl IconToken {
    pub fn new(raw: impl Into<String>) -> Result<Self, ModelError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ModelError::EmptyIconToken);
        }
        Ok(IconToken(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IconToken {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        IconToken::new(value)
    }
}

impl From<IconToken> for String {
    fn from(token: IconToken) -> Self {
        token.0
    }
}

impl fmt::Display for IconToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Icon, colour and ordered description paragraphs for one feature.
///
/// Records are immutable once built; `descriptions` keeps insertion order
/// and duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureRecord {
    icon: IconToken,
    colour: Colour,
    descriptions: Vec<String>,
}

impl FeatureRecord {
    pub fn new(
        icon: IconToken,
        colour: Colour,
        descriptions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            icon,
            colour,
            descriptions: descriptions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn icon(&self) -> &IconToken {
        &self.icon
    }

    pub fn colour(&self) -> &Colour {
        &self.colour
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_keep_order_and_duplicates() {
        let record = FeatureRecord::new(
            IconToken::new("fa-moon").unwrap(),
            Colour::parse("#a175ff").unwrap(),
            ["second", "first", "second"],
        );
        assert_eq!(record.descriptions(), ["second", "first", "second"]);
    }

    #[test]
    fn icon_token_must_not_be_blank() {
        assert_eq!(IconToken::new(" "), Err(ModelError::EmptyIconToken));
    }
}
