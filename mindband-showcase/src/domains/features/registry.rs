//! Feature registry: item identifier → display metadata.
//!
//! Populated once at startup and never mutated afterwards. Lookups are
//! keyed, not scanned, and an identifier without a record (e.g. a decorative
//! watch face) is a `NotFound`.

use std::collections::HashMap;

use mindband_model::{Colour, FeatureRecord, IconToken, ItemId, ModelError};
use thiserror::Error;

use super::catalog::{FeatureSeed, WATCH_FEATURES};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("no feature registered for '{id}'")]
    NotFound { id: String },
    #[error("feature '{id}' registered twice")]
    Duplicate { id: String },
    #[error("invalid feature data for '{id}': {source}")]
    Invalid {
        id: String,
        #[source]
        source: ModelError,
    },
}

#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    records: HashMap<ItemId, FeatureRecord>,
    /// Registration order, kept for listings.
    order: Vec<ItemId>,
}

impl FeatureRegistry {
    /// Registry holding the built-in watch features.
    pub fn builtin() -> Result<Self, FeatureError> {
        Self::from_seeds(&WATCH_FEATURES)
    }

    pub fn from_seeds(seeds: &[FeatureSeed]) -> Result<Self, FeatureError> {
        let invalid = |id: &str| {
            let id = id.to_string();
            move |source| FeatureError::Invalid { id, source }
        };

        let entries = seeds
            .iter()
            .map(|seed| {
                let id = ItemId::new(seed.id).map_err(invalid(seed.id))?;
                let icon = IconToken::new(seed.icon).map_err(invalid(seed.id))?;
                let colour =
                    Colour::parse(seed.colour).map_err(invalid(seed.id))?;
                let record = FeatureRecord::new(
                    icon,
                    colour,
                    seed.descriptions.iter().copied(),
                );
                Ok((id, record))
            })
            .collect::<Result<Vec<_>, FeatureError>>()?;

        Self::from_records(entries)
    }

    pub fn from_records(
        entries: impl IntoIterator<Item = (ItemId, FeatureRecord)>,
    ) -> Result<Self, FeatureError> {
        let mut registry = Self::default();
        for (id, record) in entries {
            if registry.records.contains_key(&id) {
                return Err(FeatureError::Duplicate {
                    id: id.into_string(),
                });
            }
            registry.order.push(id.clone());
            registry.records.insert(id, record);
        }
        Ok(registry)
    }

    /// Record for `id`, or `NotFound`.
    pub fn lookup(&self, id: &str) -> Result<&FeatureRecord, FeatureError> {
        self.records
            .get(id)
            .ok_or_else(|| FeatureError::NotFound { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &FeatureRecord)> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).map(|record| (id, record)))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_watch_face() {
        let registry = FeatureRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 7);
        for face in super::super::catalog::WATCH_FACES {
            assert!(registry.contains(face), "{face} missing");
        }
    }

    #[test]
    fn lookup_returns_registered_metadata() {
        let registry = FeatureRegistry::builtin().unwrap();
        let record = registry.lookup("battery-life").unwrap();
        assert_eq!(record.icon().as_str(), "fa-battery-half");
        assert_eq!(record.colour().as_str(), "#2FA931");
        assert_eq!(record.descriptions().len(), 1);
        assert!(record.descriptions()[0].starts_with("Enjoy extended use"));
    }

    #[test]
    fn lookup_is_repeatable() {
        let registry = FeatureRegistry::builtin().unwrap();
        let a = registry.lookup("mood-detection").unwrap().clone();
        let b = registry.lookup("mood-detection").unwrap().clone();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let registry = FeatureRegistry::builtin().unwrap();
        assert_eq!(
            registry.lookup("unknown-id").unwrap_err(),
            FeatureError::NotFound {
                id: "unknown-id".into()
            }
        );
    }

    #[test]
    fn iteration_follows_registration_order() {
        let registry = FeatureRegistry::builtin().unwrap();
        let ids: Vec<_> = registry.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, super::super::catalog::WATCH_FACES);
    }

    #[test]
    fn rejects_duplicates() {
        let seed = WATCH_FEATURES[0];
        let err = FeatureRegistry::from_seeds(&[seed, seed]).unwrap_err();
        assert!(matches!(err, FeatureError::Duplicate { .. }));
    }

    #[test]
    fn rejects_bad_colour() {
        let seed = FeatureSeed {
            colour: "red",
            ..WATCH_FEATURES[0]
        };
        let err = FeatureRegistry::from_seeds(&[seed]).unwrap_err();
        assert!(matches!(
            err,
            FeatureError::Invalid {
                source: ModelError::InvalidColour(_),
                ..
            }
        ));
    }
}
