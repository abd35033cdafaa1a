//! Game content for sheetwright.
//!
//! - [`FeatureRegistry`]: append-only catalog of [`FeatureDescriptor`]s, filled
//!   from [`ContentSource`]s at startup
//! - [`ClassTable`]: the supported [`ClassDescriptor`]s, validated against the registry
//! - [`Character`]: the resolved aggregate built from a [`RawCharacter`]
//! - [`ContentLibrary`]: registry and class table bundled for sharing across workers

mod character;
mod class;
mod error;
mod feature;
mod game;
mod library;
mod raw;
mod registry;
pub mod srd;

pub use character::{Character, ClassLevel};
pub use class::{ClassDescriptor, ClassTable, SubclassDescriptor};
pub use error::ContentError;
pub use feature::{Applicability, FeatureDescriptor, FeatureTemplate, SourceCategory};
pub use game::{spell_level_label, AbilityScores, Infusion, MagicItem, Monster, NamedText, Personality, Spell};
pub use library::ContentLibrary;
pub use raw::{RawCharacter, RawClassLevel};
pub use registry::{ContentSource, FeatureRegistry, StaticSource};
