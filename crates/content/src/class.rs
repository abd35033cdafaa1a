use crate::error::ContentError;
use crate::registry::FeatureRegistry;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Feature keys granted per level. Levels only ever add features.
pub type LevelTable = BTreeMap<u8, Vec<String>>;

fn level_table(grants: &[(u8, &str)]) -> LevelTable {
    let mut table = LevelTable::new();
    for (level, key) in grants {
        table.entry(*level).or_default().push(key.to_string());
    }
    // Ties within a level resolve alphabetically.
    for keys in table.values_mut() {
        keys.sort();
        keys.dedup();
    }
    table
}

fn keys_up_to(table: &LevelTable, level: u8) -> impl Iterator<Item = &str> {
    table.range(..=level).flat_map(|(_, keys)| keys.iter().map(String::as_str))
}

/// Lowercased with spaces and punctuation removed, for class name matching.
pub(crate) fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubclassDescriptor {
    pub name: String,
    pub description: String,
    pub features: LevelTable,
    /// Level of the parent class at which this subclass starts casting.
    pub spellcasting_from: Option<u8>,
}

impl SubclassDescriptor {
    pub fn new(name: impl Into<String>, grants: &[(u8, &str)]) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            features: level_table(grants),
            spellcasting_from: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn spellcasting_from(mut self, level: u8) -> Self {
        self.spellcasting_from = Some(level);
        self
    }

    pub fn features_at(&self, level: u8) -> &[String] {
        self.features.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A playable class. One instance per supported class, shared via `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDescriptor {
    pub name: String,
    pub hit_die: u8,
    pub features: LevelTable,
    /// Class level from which the class casts spells, and with what ability.
    pub spellcasting: Option<(u8, String)>,
    pub subclass_level: u8,
    pub subclasses: Vec<Arc<SubclassDescriptor>>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>, hit_die: u8, grants: &[(u8, &str)]) -> Self {
        Self {
            name: name.into(),
            hit_die,
            features: level_table(grants),
            spellcasting: None,
            subclass_level: 3,
            subclasses: Vec::new(),
        }
    }

    pub fn spellcasting(mut self, from_level: u8, ability: impl Into<String>) -> Self {
        self.spellcasting = Some((from_level, ability.into()));
        self
    }

    pub fn subclass_level(mut self, level: u8) -> Self {
        self.subclass_level = level;
        self
    }

    pub fn subclass(mut self, subclass: SubclassDescriptor) -> Self {
        self.subclasses.push(Arc::new(subclass));
        self
    }

    /// Feature keys granted at or below `level`, lowest level first.
    pub fn features_up_to(&self, level: u8) -> impl Iterator<Item = &str> {
        keys_up_to(&self.features, level)
    }

    pub fn features_at(&self, level: u8) -> &[String] {
        self.features.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find_subclass(&self, name: &str) -> Result<Arc<SubclassDescriptor>, ContentError> {
        let wanted = normalize(name);
        self.subclasses
            .iter()
            .find(|s| normalize(&s.name) == wanted)
            .cloned()
            .ok_or_else(|| ContentError::UnknownSubclass {
                class: self.name.clone(),
                subclass: name.to_string(),
            })
    }

    pub fn casts_spells_at(&self, level: u8) -> bool {
        matches!(&self.spellcasting, Some((from, _)) if level >= *from)
    }

    /// Every key this class or any of its subclasses can grant.
    fn all_keys(&self) -> impl Iterator<Item = &str> {
        keys_up_to(&self.features, u8::MAX)
            .chain(self.subclasses.iter().flat_map(|s| keys_up_to(&s.features, u8::MAX)))
    }
}

/// The supported classes, looked up by name.
///
/// Construction checks every feature key in every level table against the
/// registry, so a missing feature is caught at startup rather than while
/// loading some character.
#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    classes: Vec<Arc<ClassDescriptor>>,
}

impl ClassTable {
    pub fn new(
        classes: Vec<ClassDescriptor>,
        registry: &FeatureRegistry,
    ) -> Result<Self, ContentError> {
        for class in &classes {
            if let Some(missing) = class.all_keys().find(|key| !registry.contains(key)) {
                return Err(ContentError::UnknownFeature(missing.to_string()));
            }
        }
        Ok(Self {
            classes: classes.into_iter().map(Arc::new).collect(),
        })
    }

    /// Finds a class ignoring case, spaces and punctuation
    /// ("Blood Hunter" matches "bloodhunter").
    pub fn get(&self, name: &str) -> Result<Arc<ClassDescriptor>, ContentError> {
        let wanted = normalize(name);
        self.classes
            .iter()
            .find(|c| normalize(&c.name) == wanted)
            .cloned()
            .ok_or_else(|| ContentError::UnknownClass(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ClassDescriptor>> {
        self.classes.iter()
    }

    pub fn names(&self) -> String {
        self.classes.iter().map(|c| c.name.as_str()).join(", ")
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
