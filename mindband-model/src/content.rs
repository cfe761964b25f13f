use crate::colour::Colour;
use crate::feature::IconToken;

/// Structured node written into a content region.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "snake_case"))]
pub enum ContentNode {
    /// Icon + heading block, always first in a projected description.
    Heading {
        icon: IconToken,
        colour: Colour,
        text: String,
    },
    Paragraph(String),
}

impl ContentNode {
    pub fn text(&self) -> &str {
        match self {
            ContentNode::Heading { text, .. } => text,
            ContentNode::Paragraph(text) => text,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, ContentNode::Heading { .. })
    }
}
