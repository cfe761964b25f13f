//! Content projector: selection → registry lookup → description region.

use mindband_contracts::ContentRegion;
use mindband_model::{ContentNode, FeatureRecord};
use tracing::{debug, warn};

use super::heading::format_heading;
use super::registry::{FeatureError, FeatureRegistry};

/// Nodes describing `record`: the icon + heading block, then one paragraph
/// per description in registry order.
pub fn compose(id: &str, record: &FeatureRecord) -> Vec<ContentNode> {
    let heading = ContentNode::Heading {
        icon: record.icon().clone(),
        colour: record.colour().clone(),
        text: format_heading(id),
    };
    std::iter::once(heading)
        .chain(
            record
                .descriptions()
                .iter()
                .cloned()
                .map(ContentNode::Paragraph),
        )
        .collect()
}

/// Replaces the description region whenever a watch face is selected.
#[derive(Debug)]
pub struct ContentProjector<R> {
    registry: FeatureRegistry,
    region: R,
}

impl<R: ContentRegion> ContentProjector<R> {
    pub fn new(registry: FeatureRegistry, region: R) -> Self {
        Self { registry, region }
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    /// Render the description of `id` into the region.
    ///
    /// The record is resolved before anything is cleared, so an unknown id
    /// leaves the region exactly as it was. Reselecting the same id renders
    /// again from scratch.
    pub fn project(&mut self, id: &str) -> Result<usize, FeatureError> {
        let record = self.registry.lookup(id).inspect_err(|err| {
            warn!(id, error = %err, "feature selection failed");
        })?;
        let nodes = compose(id, record);
        let count = nodes.len();

        self.region.clear();
        for node in nodes {
            self.region.append(node);
        }

        debug!(id, nodes = count, "feature description projected");
        Ok(count)
    }
}
