//! Decides which optional sections a character gets and renders them.

use crate::config::ComposeOptions;
use crate::error::SheetError;
use crate::templating::{self, TemplateEngine};
use itertools::Itertools;
use log::debug;
use serde_json::{json, Value};
use sheetwright_content::{spell_level_label, Character, FeatureTemplate, Spell};
use std::sync::Arc;

/// Title of the typeset supplement.
pub const DOCUMENT_TITLE: &str = "Features, Magical Items and Spells";

/// The sections of the supplement, in the order they are always emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Preamble,
    Subclasses,
    Features,
    MagicItems,
    Spellbook,
    Infusions,
    WildShapes,
    Companions,
    Postamble,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 9] = [
        SectionKind::Preamble,
        SectionKind::Subclasses,
        SectionKind::Features,
        SectionKind::MagicItems,
        SectionKind::Spellbook,
        SectionKind::Infusions,
        SectionKind::WildShapes,
        SectionKind::Companions,
        SectionKind::Postamble,
    ];

    pub fn template(self) -> &'static str {
        match self {
            SectionKind::Preamble => templating::PREAMBLE,
            SectionKind::Subclasses => templating::SUBCLASSES,
            SectionKind::Features => templating::FEATURES,
            SectionKind::MagicItems => templating::MAGIC_ITEMS,
            SectionKind::Spellbook => templating::SPELLBOOK,
            SectionKind::Infusions => templating::INFUSIONS,
            SectionKind::WildShapes => templating::DRUID_SHAPES,
            SectionKind::Companions => templating::COMPANIONS,
            SectionKind::Postamble => templating::POSTAMBLE,
        }
    }

    /// Whether the section is rendered for `character`.
    pub fn applies_to(self, character: &Character) -> bool {
        match self {
            SectionKind::Preamble | SectionKind::Postamble => true,
            SectionKind::Subclasses => !character.subclasses().is_empty(),
            SectionKind::Features => !character.applicable_features().is_empty(),
            SectionKind::MagicItems => !character.magic_items.is_empty(),
            SectionKind::Spellbook => !character.spells.is_empty(),
            SectionKind::Infusions => !character.infusions.is_empty(),
            SectionKind::WildShapes => !character.wild_shapes.is_empty(),
            SectionKind::Companions => !character.companions.is_empty(),
        }
    }
}

/// One rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: SectionKind,
    pub markup: String,
}

fn sorted_by_name(spells: &[Spell]) -> Vec<&Spell> {
    spells
        .iter()
        .sorted_by_key(|s| s.name.to_lowercase())
        .collect()
}

fn level_heading(level: u8) -> String {
    if level == 0 {
        "Cantrips".to_string()
    } else {
        format!("{} Level", spell_level_label(level))
    }
}

/// The character fields the section templates read.
pub fn character_context(character: &Character) -> Value {
    let subclasses: Vec<Value> = character
        .classes
        .iter()
        .filter_map(|c| c.active_subclass().map(|s| (c, s)))
        .map(|(c, s)| {
            json!({
                "class": c.class.name,
                "name": s.name,
                "description": s.description,
            })
        })
        .collect();

    let features: Vec<Value> = character
        .applicable_features()
        .into_iter()
        .map(|f| {
            json!({
                "key": f.key,
                "name": f.name,
                "source": f.source.to_string(),
                "boxed": f.template == FeatureTemplate::Boxed,
                "description": f.description,
            })
        })
        .collect();

    json!({
        "name": character.name,
        "class_summary": character.class_summary(),
        "subclasses": subclasses,
        "features": features,
        "magic_items": character.magic_items,
        "infusions": character.infusions,
        "wild_shapes": character.wild_shapes,
    })
}

/// Context for the spellbook. With `spell_order` the spells are also
/// grouped by level, lowest first; otherwise `spell_levels` is empty and
/// the template lists `spells` alphabetically.
pub fn spellbook_context(character: &Character, options: ComposeOptions) -> Value {
    let spell_levels: Vec<Value> = if options.spell_order {
        character
            .spells
            .iter()
            .sorted_by_key(|s| (s.level, s.name.to_lowercase()))
            .chunk_by(|s| s.level)
            .into_iter()
            .map(|(level, spells)| {
                json!({
                    "level": level,
                    "heading": level_heading(level),
                    "spells": spells.collect::<Vec<_>>(),
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    json!({
        "character": character_context(character),
        "spell_order": options.spell_order,
        "spells": sorted_by_name(&character.spells),
        "spell_levels": spell_levels,
    })
}

/// Context for the companions section: the monsters plus every spell any
/// of them knows, flattened in companion order.
pub fn companions_context(character: &Character) -> Value {
    let spell_list: Vec<&Spell> = character
        .companions
        .iter()
        .flat_map(|m| m.spells.iter())
        .collect();
    json!({
        "monsters": character.companions,
        "spell_list": spell_list,
    })
}

/// The rendering context for one section.
pub fn section_context(kind: SectionKind, character: &Character, options: ComposeOptions) -> Value {
    match kind {
        SectionKind::Preamble => json!({
            "title": DOCUMENT_TITLE,
            "character_name": character.name,
        }),
        SectionKind::Postamble => json!({}),
        SectionKind::Spellbook => spellbook_context(character, options),
        SectionKind::Companions => companions_context(character),
        _ => json!({ "character": character_context(character) }),
    }
}

/// Renders a character's supplement sections.
#[derive(Debug, Clone)]
pub struct ContentComposer {
    engine: Arc<TemplateEngine>,
}

impl ContentComposer {
    pub fn new(engine: Arc<TemplateEngine>) -> Self {
        Self { engine }
    }

    /// Renders the preamble, each applicable section and the postamble, in
    /// [`SectionKind::ORDER`]. Never touches the character.
    pub fn compose(
        &self,
        character: &Character,
        options: ComposeOptions,
    ) -> Result<Vec<Fragment>, SheetError> {
        SectionKind::ORDER
            .into_iter()
            .filter(|kind| kind.applies_to(character))
            .map(|kind| {
                let context = section_context(kind, character, options);
                let markup = self.engine.render(kind.template(), &context)?;
                debug!("Rendered {:?} for {} ({} bytes)", kind, character.name, markup.len());
                Ok(Fragment { kind, markup })
            })
            .collect()
    }
}
