use crate::class::{ClassDescriptor, ClassTable};
use crate::error::ContentError;
use crate::registry::{ContentSource, FeatureRegistry};
use crate::srd;
use log::info;

/// The feature registry and class table, populated together.
///
/// Built once before any sheet is processed and then only read, which is
/// what lets one instance be shared by every worker.
#[derive(Debug, Default)]
pub struct ContentLibrary {
    registry: FeatureRegistry,
    classes: ClassTable,
}

impl ContentLibrary {
    /// Registers every source, then validates the classes against the result.
    pub fn new(
        sources: &[&dyn ContentSource],
        classes: Vec<ClassDescriptor>,
    ) -> Result<Self, ContentError> {
        let mut registry = FeatureRegistry::new();
        for source in sources {
            registry.add_source(*source)?;
        }
        let classes = ClassTable::new(classes, &registry)?;
        Ok(Self { registry, classes })
    }

    /// The built-in content set.
    pub fn standard() -> Result<Self, ContentError> {
        let sources = srd::sources();
        let dyn_sources: Vec<&dyn ContentSource> =
            sources.iter().map(|s| s as &dyn ContentSource).collect();
        let library = Self::new(&dyn_sources, srd::available_classes())?;
        info!(
            "Content library ready: {} features, classes {}",
            library.registry.len(),
            library.classes.names()
        );
        Ok(library)
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }
}
