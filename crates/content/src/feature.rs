use crate::character::Character;
use serde::Serialize;
use std::fmt;

/// Where a feature comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    Class,
    Subclass,
    Background,
    Race,
    Feat,
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SourceCategory::Class => "class",
            SourceCategory::Subclass => "subclass",
            SourceCategory::Background => "background",
            SourceCategory::Race => "race",
            SourceCategory::Feat => "feat",
        };
        f.write_str(label)
    }
}

/// How a feature's description is laid out in the features section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureTemplate {
    #[default]
    Standard,
    /// Framed, for features the player consults at the table.
    Boxed,
}

/// Decides whether a feature is shown for a given character.
///
/// Evaluation is a pure function of the character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Applicability {
    #[default]
    Always,
    /// Total character level across all classes.
    MinLevel(u8),
    MinClassLevel { class: String, level: u8 },
    ClassMember(String),
    Spellcaster,
    AllOf(Vec<Applicability>),
    AnyOf(Vec<Applicability>),
}

impl Applicability {
    pub fn evaluate(&self, character: &Character) -> bool {
        match self {
            Applicability::Always => true,
            Applicability::MinLevel(level) => character.total_level() >= *level,
            Applicability::MinClassLevel { class, level } => character.class_level(class) >= *level,
            Applicability::ClassMember(class) => character.class_level(class) > 0,
            Applicability::Spellcaster => character.is_spellcaster(),
            Applicability::AllOf(all) => all.iter().all(|a| a.evaluate(character)),
            Applicability::AnyOf(any) => any.iter().any(|a| a.evaluate(character)),
        }
    }
}

/// A declarative game feature. Immutable once registered.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureDescriptor {
    pub key: String,
    pub name: String,
    pub source: SourceCategory,
    pub template: FeatureTemplate,
    /// reStructuredText-flavoured description.
    pub description: String,
    pub applies: Applicability,
    pub grants_spellcasting: bool,
}

impl FeatureDescriptor {
    pub fn new(key: impl Into<String>, name: impl Into<String>, source: SourceCategory) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            source,
            template: FeatureTemplate::Standard,
            description: String::new(),
            applies: Applicability::Always,
            grants_spellcasting: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn boxed(mut self) -> Self {
        self.template = FeatureTemplate::Boxed;
        self
    }

    pub fn applies(mut self, applies: Applicability) -> Self {
        self.applies = applies;
        self
    }

    pub fn grants_spellcasting(mut self) -> Self {
        self.grants_spellcasting = true;
        self
    }

    pub fn applies_to(&self, character: &Character) -> bool {
        self.applies.evaluate(character)
    }
}
