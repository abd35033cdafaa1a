use crate::error::ContentError;
use crate::feature::FeatureDescriptor;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// A named bundle of feature definitions, such as one class's features or
/// the list of feats.
pub trait ContentSource {
    fn name(&self) -> &str;

    fn features(&self) -> Vec<FeatureDescriptor>;
}

/// A [`ContentSource`] backed by a plain constructor function.
#[derive(Debug, Clone, Copy)]
pub struct StaticSource {
    pub name: &'static str,
    pub build: fn() -> Vec<FeatureDescriptor>,
}

impl ContentSource for StaticSource {
    fn name(&self) -> &str {
        self.name
    }

    fn features(&self) -> Vec<FeatureDescriptor> {
        (self.build)()
    }
}

/// Catalog from feature key to descriptor.
///
/// Append-only: it is filled once at startup and shared read-only (usually
/// behind an `Arc`) for the rest of the process.
#[derive(Debug, Default)]
pub struct FeatureRegistry {
    features: HashMap<String, Arc<FeatureDescriptor>>,
    sources: Vec<String>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `descriptor` under `key`. The descriptor's own key is
    /// overwritten so the two can never disagree.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        mut descriptor: FeatureDescriptor,
    ) -> Result<(), ContentError> {
        let key = key.into();
        if self.features.contains_key(&key) {
            return Err(ContentError::DuplicateFeature(key));
        }
        descriptor.key = key.clone();
        self.features.insert(key, Arc::new(descriptor));
        Ok(())
    }

    /// Registers every feature a source defines. Returns how many were added.
    pub fn add_source(&mut self, source: &dyn ContentSource) -> Result<usize, ContentError> {
        let features = source.features();
        let count = features.len();
        for feature in features {
            let key = feature.key.clone();
            self.register(key, feature)?;
        }
        debug!("Registered {} features from '{}'", count, source.name());
        self.sources.push(source.name().to_string());
        Ok(count)
    }

    pub fn lookup(&self, key: &str) -> Result<Arc<FeatureDescriptor>, ContentError> {
        self.features
            .get(key)
            .cloned()
            .ok_or_else(|| ContentError::UnknownFeature(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.features.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Names of the sources added so far, in registration order.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}
