use crate::class::{normalize, ClassDescriptor, SubclassDescriptor};
use crate::error::ContentError;
use crate::feature::FeatureDescriptor;
use crate::game::{AbilityScores, Infusion, MagicItem, Monster, Personality, Spell};
use crate::library::ContentLibrary;
use crate::raw::RawCharacter;
use log::debug;
use sheetwright_traits::ImagePlacement;
use std::collections::HashSet;
use std::sync::Arc;

/// One class a character has levels in.
#[derive(Debug, Clone)]
pub struct ClassLevel {
    pub class: Arc<ClassDescriptor>,
    pub level: u8,
    pub subclass: Option<Arc<SubclassDescriptor>>,
}

impl ClassLevel {
    /// Whether the chosen subclass has kicked in at this level.
    pub fn active_subclass(&self) -> Option<&Arc<SubclassDescriptor>> {
        self.subclass
            .as_ref()
            .filter(|_| self.level >= self.class.subclass_level)
    }

    /// Feature keys in grant order: level by level, the class's grants
    /// before the subclass's.
    pub fn granted_keys(&self) -> Vec<&str> {
        let subclass = self.active_subclass();
        (1..=self.level)
            .flat_map(|level| {
                let from_class = self.class.features_at(level).iter();
                let from_subclass = subclass.map(|s| s.features_at(level)).unwrap_or(&[]).iter();
                from_class.chain(from_subclass).map(String::as_str)
            })
            .collect()
    }

    pub fn grants_spellcasting(&self) -> bool {
        self.class.casts_spells_at(self.level)
            || self
                .active_subclass()
                .and_then(|s| s.spellcasting_from)
                .is_some_and(|from| self.level >= from)
    }
}

/// A character resolved against a [`ContentLibrary`].
///
/// Built once per sheet and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Character {
    pub name: String,
    pub player_name: Option<String>,
    pub classes: Vec<ClassLevel>,
    pub race: Option<Arc<FeatureDescriptor>>,
    pub background: Option<Arc<FeatureDescriptor>>,
    pub alignment: Option<String>,
    pub abilities: AbilityScores,
    pub hit_points: Option<u16>,
    pub armor_class: Option<u8>,
    pub speed: Option<u16>,
    pub personality: Personality,
    /// Every feature granted, duplicates collapsed, in grant order.
    pub features: Vec<Arc<FeatureDescriptor>>,
    pub spells: Vec<Spell>,
    pub magic_items: Vec<MagicItem>,
    pub infusions: Vec<Infusion>,
    pub companions: Vec<Monster>,
    pub wild_shapes: Vec<Monster>,
    pub images: Vec<ImagePlacement>,
    is_spellcaster: bool,
}

impl Character {
    /// Resolves a raw definition.
    ///
    /// Feature keys are gathered from each class (and active subclass) up to
    /// its level, then from background, race, feats and extra features.
    /// The first grant of a key wins; later duplicates are dropped.
    pub fn load(raw: &RawCharacter, library: &ContentLibrary) -> Result<Self, ContentError> {
        let classes = raw
            .classes
            .iter()
            .map(|rc| {
                let class = library.classes().get(&rc.name)?;
                let subclass = rc
                    .subclass
                    .as_deref()
                    .map(|name| class.find_subclass(name))
                    .transpose()?;
                Ok(ClassLevel { class, level: rc.level, subclass })
            })
            .collect::<Result<Vec<_>, ContentError>>()?;

        let mut keys: Vec<&str> = classes.iter().flat_map(ClassLevel::granted_keys).collect();
        keys.extend(raw.background.as_deref());
        keys.extend(raw.race.as_deref());
        keys.extend(raw.feats.iter().map(String::as_str));
        keys.extend(raw.features.iter().map(String::as_str));

        let mut seen = HashSet::new();
        let features = keys
            .into_iter()
            .filter(|key| seen.insert(*key))
            .map(|key| library.registry().lookup(key))
            .collect::<Result<Vec<_>, _>>()?;

        let registry = library.registry();
        let race = raw.race.as_deref().map(|k| registry.lookup(k)).transpose()?;
        let background = raw.background.as_deref().map(|k| registry.lookup(k)).transpose()?;

        let is_spellcaster = classes.iter().any(ClassLevel::grants_spellcasting)
            || features.iter().any(|f| f.grants_spellcasting);

        debug!(
            "Loaded {} with {} features (spellcaster: {})",
            raw.name,
            features.len(),
            is_spellcaster
        );

        Ok(Self {
            name: raw.name.clone(),
            player_name: raw.player_name.clone(),
            classes,
            race,
            background,
            alignment: raw.alignment.clone(),
            abilities: raw.abilities,
            hit_points: raw.hit_points,
            armor_class: raw.armor_class,
            speed: raw.speed,
            personality: raw.personality.clone(),
            features,
            spells: raw.spells.clone(),
            magic_items: raw.magic_items.clone(),
            infusions: raw.infusions.clone(),
            companions: raw.companions.clone(),
            wild_shapes: raw.wild_shapes.clone(),
            images: raw.images.clone(),
            is_spellcaster,
        })
    }

    pub fn is_spellcaster(&self) -> bool {
        self.is_spellcaster
    }

    pub fn total_level(&self) -> u8 {
        self.classes.iter().map(|c| c.level).sum()
    }

    /// Levels in the named class, 0 if the character has none.
    pub fn class_level(&self, class_name: &str) -> u8 {
        let wanted = normalize(class_name);
        self.classes
            .iter()
            .filter(|c| normalize(&c.class.name) == wanted)
            .map(|c| c.level)
            .sum()
    }

    /// Subclasses that are active at the character's current levels.
    pub fn subclasses(&self) -> Vec<&Arc<SubclassDescriptor>> {
        self.classes.iter().filter_map(ClassLevel::active_subclass).collect()
    }

    /// Features whose applicability predicate holds for this character.
    pub fn applicable_features(&self) -> Vec<&Arc<FeatureDescriptor>> {
        self.features.iter().filter(|f| f.applies_to(self)).collect()
    }

    pub fn feature_keys(&self) -> Vec<&str> {
        self.features.iter().map(|f| f.key.as_str()).collect()
    }

    /// "Wizard 5 / Fighter 2"
    pub fn class_summary(&self) -> String {
        self.classes
            .iter()
            .map(|c| match c.active_subclass() {
                Some(sub) => format!("{} ({}) {}", c.class.name, sub.name, c.level),
                None => format!("{} {}", c.class.name, c.level),
            })
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
