use crate::feature::{Applicability, FeatureDescriptor, SourceCategory};

fn feat(key: &str, name: &str, description: &str) -> FeatureDescriptor {
    FeatureDescriptor::new(key, name, SourceCategory::Feat).description(description)
}

pub(super) fn features() -> Vec<FeatureDescriptor> {
    vec![
        feat(
            "alert",
            "Alert",
            "You gain a +5 bonus to initiative and can't be surprised while you are conscious.",
        ),
        feat(
            "lucky",
            "Lucky",
            "You have 3 luck points. Spend one to roll an additional d20 for an attack roll, \
             ability check, or saving throw.",
        )
        .boxed(),
        feat(
            "war_caster",
            "War Caster",
            "- Advantage on **Constitution** saves to maintain concentration\n\
             - Perform somatic components with weapons or a shield in hand\n\
             - Cast a spell as an opportunity attack",
        )
        .applies(Applicability::Spellcaster),
        feat(
            "magic_initiate",
            "Magic Initiate",
            "You learn two cantrips and one 1st-level spell from a class's spell list.",
        )
        .grants_spellcasting(),
        feat(
            "sharpshooter",
            "Sharpshooter",
            "Long range doesn't impose disadvantage, ranged attacks ignore half and three-quarters cover, \
             and you can take -5 to hit for +10 damage.",
        ),
        feat(
            "great_weapon_master",
            "Great Weapon Master",
            "On a critical hit or kill with a melee weapon, make one melee weapon attack as a bonus action.",
        ),
        feat(
            "tough",
            "Tough",
            "Your hit point maximum increases by twice your level.",
        ),
        feat(
            "mobile",
            "Mobile",
            "Your speed increases by 10 feet and you avoid opportunity attacks from creatures you attack.",
        ),
        feat(
            "sentinel",
            "Sentinel",
            "Creatures you hit with opportunity attacks have their speed reduced to 0.",
        )
        .applies(Applicability::MinLevel(4)),
        feat(
            "observant",
            "Observant",
            "You gain a +5 bonus to passive Wisdom (Perception) and passive Intelligence (Investigation).",
        ),
    ]
}
