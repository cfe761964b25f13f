use std::borrow::Borrow;
use std::fmt;

use crate::error::ModelError;

/// Identifier of one carousel entry (e.g. `sleep-tracking`).
///
/// Identifiers are kebab-case by convention but only non-emptiness is
/// enforced; the feature registry decides which identifiers carry content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ItemId(String);

impl ItemId {
    pub fn new(raw: impl Into<String>) -> Result<Self, ModelError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ModelError::EmptyIdentifier);
        }
        Ok(ItemId(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ItemId::new(value)
    }
}

impl TryFrom<&str> for ItemId {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ItemId::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<ItemId, _>` be queried with a plain `&str`.
impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
