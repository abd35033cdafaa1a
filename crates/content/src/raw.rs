//! The character definition as authored, before anything is resolved.

use crate::game::{AbilityScores, Infusion, MagicItem, Monster, Personality, Spell};
use serde::{Deserialize, Serialize};
use sheetwright_traits::ImagePlacement;

pub const MAX_LEVEL: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClassLevel {
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub subclass: Option<String>,
}

/// A character definition as produced by a reader.
///
/// Race and background are feature keys; `feats` and `features` list any
/// further keys the character was granted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCharacter {
    pub name: String,
    pub player_name: Option<String>,
    pub classes: Vec<RawClassLevel>,
    pub race: Option<String>,
    pub background: Option<String>,
    pub alignment: Option<String>,
    pub feats: Vec<String>,
    pub features: Vec<String>,
    pub abilities: AbilityScores,
    pub hit_points: Option<u16>,
    pub armor_class: Option<u8>,
    pub speed: Option<u16>,
    pub personality: Personality,
    pub spells: Vec<Spell>,
    pub magic_items: Vec<MagicItem>,
    pub infusions: Vec<Infusion>,
    pub companions: Vec<Monster>,
    pub wild_shapes: Vec<Monster>,
    pub images: Vec<ImagePlacement>,
}

impl RawCharacter {
    /// Structural checks a definition must pass before it is resolved.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("character has no name".to_string());
        }
        if self.classes.is_empty() {
            return Err(format!("'{}' has no classes", self.name));
        }
        for class in &self.classes {
            if class.level == 0 || class.level > MAX_LEVEL {
                return Err(format!(
                    "{} level {} is outside 1..={}",
                    class.name, class.level, MAX_LEVEL
                ));
            }
        }
        let total: u32 = self.classes.iter().map(|c| c.level as u32).sum();
        if total > MAX_LEVEL as u32 {
            return Err(format!("total level {total} exceeds {MAX_LEVEL}"));
        }
        if let Some(spell) = self.spells.iter().find(|s| s.level > 9) {
            return Err(format!("spell '{}' has level {}", spell.name, spell.level));
        }
        Ok(())
    }
}
