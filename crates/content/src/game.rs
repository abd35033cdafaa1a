//! Plain game records carried by a character: spells, items, creatures.

use serde::{Deserialize, Serialize};

/// Label for a spell level: "Cantrip" for 0, ordinals otherwise.
pub fn spell_level_label(level: u8) -> String {
    match level {
        0 => "Cantrip".to_string(),
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{n}th"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityScores {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl AbilityScores {
    pub fn modifier(score: u8) -> i8 {
        ((score as i16 - 10).div_euclid(2)) as i8
    }

    /// Scores in sheet order, with their abbreviations.
    pub fn labelled(&self) -> [(&'static str, u8); 6] {
        [
            ("STR", self.strength),
            ("DEX", self.dexterity),
            ("CON", self.constitution),
            ("INT", self.intelligence),
            ("WIS", self.wisdom),
            ("CHA", self.charisma),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personality {
    pub traits: String,
    pub ideals: String,
    pub bonds: String,
    pub flaws: String,
    pub backstory: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spell {
    pub name: String,
    pub level: u8,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    pub components: String,
    pub duration: String,
    pub ritual: bool,
    pub concentration: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagicItem {
    pub name: String,
    pub rarity: String,
    pub requires_attunement: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Infusion {
    pub name: String,
    pub item: String,
    pub prerequisite: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedText {
    pub name: String,
    #[serde(default)]
    pub text: String,
}

/// A creature stat block: companions and wild shape forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Monster {
    pub name: String,
    /// Size and type line, e.g. "Medium beast".
    pub kind: String,
    pub armor_class: u8,
    pub hit_points: u16,
    pub speed: String,
    pub abilities: AbilityScores,
    pub senses: String,
    pub languages: String,
    pub challenge_rating: String,
    pub traits: Vec<NamedText>,
    pub actions: Vec<NamedText>,
    pub spells: Vec<Spell>,
    pub description: String,
}
