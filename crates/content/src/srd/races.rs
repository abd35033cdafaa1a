use crate::feature::{FeatureDescriptor, SourceCategory};

fn race(key: &str, name: &str, description: &str) -> FeatureDescriptor {
    FeatureDescriptor::new(key, name, SourceCategory::Race).description(description)
}

pub(super) fn features() -> Vec<FeatureDescriptor> {
    vec![
        race(
            "human",
            "Human",
            "Your ability scores each increase by 1.",
        ),
        race(
            "high_elf",
            "High Elf",
            "- *Darkvision* 60 ft.\n\
             - *Fey Ancestry*: advantage on saves against being charmed\n\
             - *Cantrip*: you know one cantrip of your choice from the wizard spell list",
        )
        .grants_spellcasting(),
        race(
            "wood_elf",
            "Wood Elf",
            "- *Darkvision* 60 ft.\n\
             - *Fleet of Foot*: base walking speed 35 ft.\n\
             - *Mask of the Wild*: hide when lightly obscured by natural phenomena",
        ),
        race(
            "hill_dwarf",
            "Hill Dwarf",
            "- *Darkvision* 60 ft.\n\
             - *Dwarven Resilience*: advantage on saves against poison\n\
             - *Dwarven Toughness*: hit point maximum increases by 1 per level",
        ),
        race(
            "lightfoot_halfling",
            "Lightfoot Halfling",
            "- *Lucky*: reroll a 1 on an attack roll, ability check, or saving throw\n\
             - *Naturally Stealthy*: hide behind a creature at least one size larger",
        ),
        race(
            "dragonborn",
            "Dragonborn",
            "- *Breath Weapon*: exhale destructive energy based on your draconic ancestry\n\
             - *Damage Resistance* to the damage type of your ancestry",
        )
        .boxed(),
        race(
            "tiefling",
            "Tiefling",
            "- *Darkvision* 60 ft.\n\
             - *Hellish Resistance*: resistance to fire damage\n\
             - *Infernal Legacy*: you know the *thaumaturgy* cantrip",
        )
        .grants_spellcasting(),
        race(
            "half_orc",
            "Half-Orc",
            "- *Relentless Endurance*: drop to 1 hit point instead of 0 once per long rest\n\
             - *Savage Attacks*: roll one extra weapon damage die on a melee critical hit",
        ),
        race(
            "rock_gnome",
            "Rock Gnome",
            "- *Gnome Cunning*: advantage on Intelligence, Wisdom, and Charisma saves against magic\n\
             - *Tinker*: construct tiny clockwork devices",
        ),
    ]
}
