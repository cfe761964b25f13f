//! In-memory description region with a plain-text rendering.

use std::fmt::Write as _;

use mindband_contracts::ContentRegion;
use mindband_model::ContentNode;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRegion {
    nodes: Vec<ContentNode>,
}

impl MemoryRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[ContentNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Heading text, if a description is displayed.
    pub fn heading(&self) -> Option<&str> {
        self.nodes
            .iter()
            .find(|node| node.is_heading())
            .map(ContentNode::text)
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|node| match node {
            ContentNode::Paragraph(text) => Some(text.as_str()),
            ContentNode::Heading { .. } => None,
        })
    }

    /// `[icon colour] Heading` line followed by blank-line separated
    /// paragraphs.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            if !out.is_empty() {
                out.push('\n');
            }
            match node {
                ContentNode::Heading { icon, colour, text } => {
                    let _ = writeln!(out, "[{icon} {colour}] {text}");
                }
                ContentNode::Paragraph(text) => {
                    let _ = writeln!(out, "{text}");
                }
            }
        }
        out
    }
}

impl ContentRegion for MemoryRegion {
    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn append(&mut self, node: ContentNode) {
        self.nodes.push(node);
    }
}
