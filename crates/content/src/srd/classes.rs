use crate::class::{ClassDescriptor, SubclassDescriptor};
use crate::feature::{FeatureDescriptor, SourceCategory};
use crate::registry::StaticSource;

fn class(key: &str, name: &str, description: &str) -> FeatureDescriptor {
    FeatureDescriptor::new(key, name, SourceCategory::Class).description(description)
}

fn sub(key: &str, name: &str, description: &str) -> FeatureDescriptor {
    FeatureDescriptor::new(key, name, SourceCategory::Subclass).description(description)
}

const ASI: [(u8, &str); 5] = [
    (4, "ability_score_improvement"),
    (8, "ability_score_improvement"),
    (12, "ability_score_improvement"),
    (16, "ability_score_improvement"),
    (19, "ability_score_improvement"),
];

fn with_asi(grants: &[(u8, &'static str)]) -> Vec<(u8, &'static str)> {
    grants.iter().chain(ASI.iter()).copied().collect()
}

/// Features granted by more than one class.
fn common() -> Vec<FeatureDescriptor> {
    vec![
        class(
            "ability_score_improvement",
            "Ability Score Improvement",
            "Increase one ability score by 2, or two ability scores by 1. \
             You can't increase an ability score above 20 this way.",
        ),
        class(
            "extra_attack",
            "Extra Attack",
            "You can attack twice, instead of once, whenever you take the *Attack* action on your turn.",
        ),
        class(
            "fighting_style",
            "Fighting Style",
            "You adopt a particular style of fighting as your specialty.",
        ),
        class(
            "spellcasting",
            "Spellcasting",
            "You can cast spells. See the spell pages for your spellcasting ability, \
             save DC and attack bonus.",
        )
        .grants_spellcasting(),
        class(
            "evasion",
            "Evasion",
            "When subjected to an effect that allows a **Dexterity** saving throw to take only half damage, \
             you take no damage on a success and half damage on a failure.",
        ),
        class(
            "expertise",
            "Expertise",
            "Choose two of your skill proficiencies. Your proficiency bonus is doubled for any ability check \
             you make that uses either of the chosen proficiencies.",
        ),
        class(
            "unarmored_defense",
            "Unarmored Defense",
            "While you are not wearing any armor, your Armor Class includes an extra ability modifier.",
        ),
    ]
}

fn artificer() -> Vec<FeatureDescriptor> {
    vec![
        class("magical_tinkering", "Magical Tinkering", "Touch a Tiny nonmagical object and give it a minor magical property."),
        class(
            "infuse_item",
            "Infuse Item",
            "Whenever you finish a long rest, you can touch a nonmagical object and imbue it with one of \
             your artificer infusions, turning it into a magic item.",
        )
        .boxed(),
        class("the_right_tool_for_the_job", "The Right Tool for the Job", "Magically create one set of artisan's tools."),
        class("tool_expertise", "Tool Expertise", "Your proficiency bonus is doubled for any ability check using a tool."),
        class("flash_of_genius", "Flash of Genius", "As a reaction, add your Intelligence modifier to an ability check or saving throw."),
        sub("experimental_elixir", "Experimental Elixir", "After a long rest, produce an experimental elixir in an empty flask."),
        sub("alchemical_savant", "Alchemical Savant", "Add your Intelligence modifier to healing or acid, fire, necrotic or poison damage rolls."),
        sub("steel_defender", "Steel Defender", "A mechanical companion that fights at your side.").boxed(),
    ]
}

fn barbarian() -> Vec<FeatureDescriptor> {
    vec![
        class(
            "rage",
            "Rage",
            "On your turn, you can enter a rage as a bonus action.\n\n\
             - Advantage on **Strength** checks and saving throws\n\
             - Bonus damage on melee weapon attacks using Strength\n\
             - Resistance to bludgeoning, piercing, and slashing damage",
        )
        .boxed(),
        class("reckless_attack", "Reckless Attack", "Gain advantage on melee Strength attacks this turn; attacks against you have advantage until your next turn."),
        class("danger_sense", "Danger Sense", "Advantage on Dexterity saving throws against effects you can see."),
        class("fast_movement", "Fast Movement", "Your speed increases by 10 feet while you aren't wearing heavy armor."),
        class("feral_instinct", "Feral Instinct", "Advantage on initiative rolls."),
        class("brutal_critical", "Brutal Critical", "Roll one additional weapon damage die on a critical hit with a melee attack."),
        sub("frenzy", "Frenzy", "While raging, make a single melee weapon attack as a bonus action on each of your turns."),
        sub("mindless_rage", "Mindless Rage", "You can't be charmed or frightened while raging."),
        sub("totem_spirit", "Totem Spirit", "Choose a totem spirit and gain its feature."),
        sub("aspect_of_the_beast", "Aspect of the Beast", "Gain a magical benefit based on the totem animal of your choice."),
    ]
}

fn bard() -> Vec<FeatureDescriptor> {
    vec![
        class(
            "bardic_inspiration",
            "Bardic Inspiration",
            "As a bonus action, give one creature other than yourself an inspiration die it can add to one \
             ability check, attack roll, or saving throw.",
        )
        .boxed(),
        class("jack_of_all_trades", "Jack of All Trades", "Add half your proficiency bonus to any ability check that doesn't already include it."),
        class("song_of_rest", "Song of Rest", "Allies who spend hit dice during a short rest regain extra hit points."),
        class("font_of_inspiration", "Font of Inspiration", "Regain all expended uses of Bardic Inspiration on a short or long rest."),
        class("countercharm", "Countercharm", "Start a performance that grants advantage on saves against being frightened or charmed."),
        sub("cutting_words", "Cutting Words", "Use a reaction and a Bardic Inspiration die to reduce a creature's roll."),
        sub("additional_magical_secrets", "Additional Magical Secrets", "Learn two spells of your choice from any class."),
        sub("combat_inspiration", "Combat Inspiration", "Inspiration dice can also be added to damage rolls or Armor Class."),
    ]
}

fn cleric() -> Vec<FeatureDescriptor> {
    vec![
        class(
            "channel_divinity",
            "Channel Divinity",
            "Channel divine energy directly from your deity to fuel magical effects.\n\n\
             - *Turn Undead*: each undead that can see or hear you must make a **Wisdom** saving throw",
        )
        .boxed(),
        class("destroy_undead", "Destroy Undead", "Undead that fail against your Turn Undead are destroyed if their challenge rating is low enough."),
        class("divine_intervention", "Divine Intervention", "Call on your deity to intervene on your behalf."),
        sub("disciple_of_life", "Disciple of Life", "Healing spells of 1st level or higher restore additional hit points."),
        sub("preserve_life", "Preserve Life", "Channel Divinity: restore hit points divided among creatures within 30 feet."),
        sub("warding_flare", "Warding Flare", "Impose disadvantage on an attack roll against you with a flash of light."),
        sub("radiance_of_the_dawn", "Radiance of the Dawn", "Channel Divinity: dispel magical darkness and deal radiant damage."),
    ]
}

fn druid() -> Vec<FeatureDescriptor> {
    vec![
        class("druidic", "Druidic", "You know Druidic, the secret language of druids."),
        class(
            "wild_shape",
            "Wild Shape",
            "As an action, magically assume the shape of a beast you have seen before. \
             Your known forms are listed on the wild shape pages.",
        )
        .boxed(),
        class("timeless_body", "Timeless Body", "You age more slowly: for every 10 years that pass, your body ages only 1 year."),
        sub("natural_recovery", "Natural Recovery", "Recover expended spell slots during a short rest."),
        sub("combat_wild_shape", "Combat Wild Shape", "Use Wild Shape as a bonus action and expend spell slots to regain hit points."),
    ]
}

fn fighter() -> Vec<FeatureDescriptor> {
    vec![
        class("second_wind", "Second Wind", "On your turn, use a bonus action to regain hit points equal to 1d10 + your fighter level.").boxed(),
        class("action_surge", "Action Surge", "On your turn, you can take one additional action.").boxed(),
        class("indomitable", "Indomitable", "Reroll a saving throw that you fail."),
        sub("improved_critical", "Improved Critical", "Your weapon attacks score a critical hit on a roll of 19 or 20."),
        sub("remarkable_athlete", "Remarkable Athlete", "Add half your proficiency bonus to Strength, Dexterity, or Constitution checks."),
        sub("weapon_bond", "Weapon Bond", "Bond with up to two weapons; you can't be disarmed of them and can summon them."),
        sub("war_magic", "War Magic", "When you use your action to cast a cantrip, you can make one weapon attack as a bonus action."),
    ]
}

fn monk() -> Vec<FeatureDescriptor> {
    vec![
        class("martial_arts", "Martial Arts", "Use Dexterity for unarmed strikes and monk weapons, and make an unarmed strike as a bonus action."),
        class(
            "ki",
            "Ki",
            "You have a pool of ki points.\n\n\
             - *Flurry of Blows*\n\
             - *Patient Defense*\n\
             - *Step of the Wind*",
        )
        .boxed(),
        class("unarmored_movement", "Unarmored Movement", "Your speed increases while you are not wearing armor or wielding a shield."),
        class("deflect_missiles", "Deflect Missiles", "Use your reaction to reduce damage from a ranged weapon attack."),
        class("slow_fall", "Slow Fall", "Use your reaction to reduce falling damage."),
        class("stunning_strike", "Stunning Strike", "Spend 1 ki point to attempt to stun a creature you hit with a melee weapon attack."),
        sub("open_hand_technique", "Open Hand Technique", "Impose extra effects on creatures hit by your Flurry of Blows."),
        sub("shadow_arts", "Shadow Arts", "Spend ki points to cast darkness, darkvision, pass without trace, or silence."),
    ]
}

fn paladin() -> Vec<FeatureDescriptor> {
    vec![
        class("divine_sense", "Divine Sense", "Detect the location of celestials, fiends, or undead within 60 feet."),
        class("lay_on_hands", "Lay on Hands", "A pool of healing power that replenishes when you take a long rest.").boxed(),
        class("divine_smite", "Divine Smite", "Expend a spell slot to deal radiant damage when you hit with a melee weapon attack."),
        class("divine_health", "Divine Health", "You are immune to disease."),
        class("aura_of_protection", "Aura of Protection", "Friendly creatures within 10 feet add your Charisma modifier to saving throws."),
        sub("sacred_weapon", "Sacred Weapon", "Channel Divinity: add your Charisma modifier to attack rolls with a weapon."),
        sub("vow_of_enmity", "Vow of Enmity", "Channel Divinity: gain advantage on attack rolls against one creature."),
    ]
}

fn ranger() -> Vec<FeatureDescriptor> {
    vec![
        class("favored_enemy", "Favored Enemy", "Advantage on Survival checks to track your favored enemies."),
        class("natural_explorer", "Natural Explorer", "You are particularly familiar with one type of natural environment."),
        class("primeval_awareness", "Primeval Awareness", "Expend a spell slot to sense certain creature types nearby."),
        sub("hunters_prey", "Hunter's Prey", "Choose Colossus Slayer, Giant Killer, or Horde Breaker."),
        sub("rangers_companion", "Ranger's Companion", "Gain a beast companion that accompanies you.").boxed(),
    ]
}

fn rogue() -> Vec<FeatureDescriptor> {
    vec![
        class(
            "sneak_attack",
            "Sneak Attack",
            "Once per turn, deal extra damage to one creature you hit with an attack if you have advantage \
             on the attack roll.",
        )
        .boxed(),
        class("thieves_cant", "Thieves' Cant", "A secret mix of dialect, jargon, and code."),
        class("cunning_action", "Cunning Action", "Take the *Dash*, *Disengage*, or *Hide* action as a bonus action."),
        class("uncanny_dodge", "Uncanny Dodge", "Use your reaction to halve the damage of an attack that hits you."),
        sub("fast_hands", "Fast Hands", "Use Cunning Action to make a Sleight of Hand check or use an object."),
        sub("mage_hand_legerdemain", "Mage Hand Legerdemain", "Your *mage hand* is invisible and can pick locks and pockets."),
    ]
}

fn sorcerer() -> Vec<FeatureDescriptor> {
    vec![
        class("font_of_magic", "Font of Magic", "Sorcery points can be converted into spell slots and back.").boxed(),
        class("metamagic", "Metamagic", "Twist your spells to suit your needs."),
        sub("draconic_resilience", "Draconic Resilience", "Your hit point maximum increases and you have natural armor."),
        sub("wild_magic_surge", "Wild Magic Surge", "Casting a sorcerer spell can unleash a surge of wild magic."),
    ]
}

fn warlock() -> Vec<FeatureDescriptor> {
    vec![
        class("pact_magic", "Pact Magic", "Your arcane research and the magic bestowed by your patron give you spells.")
            .grants_spellcasting(),
        class("eldritch_invocations", "Eldritch Invocations", "Fragments of forbidden knowledge that imbue you with magical ability."),
        class("pact_boon", "Pact Boon", "Your patron bestows a gift: Pact of the Chain, Blade, or Tome."),
        sub("dark_ones_blessing", "Dark One's Blessing", "Gain temporary hit points when you reduce a hostile creature to 0 hit points."),
        sub("fey_presence", "Fey Presence", "Charm or frighten creatures in a 10-foot cube."),
    ]
}

fn wizard() -> Vec<FeatureDescriptor> {
    vec![
        class("arcane_recovery", "Arcane Recovery", "Once per day during a short rest, recover expended spell slots.").boxed(),
        class("spell_mastery", "Spell Mastery", "Cast a chosen 1st-level and 2nd-level spell at their lowest level without expending a slot."),
        sub("sculpt_spells", "Sculpt Spells", "Create pockets of relative safety within your evocation spells."),
        sub("arcane_ward", "Arcane Ward", "Weave magic around yourself for protection when you cast abjuration spells."),
    ]
}

fn revised_ranger() -> Vec<FeatureDescriptor> {
    vec![
        class(
            "revised_favored_enemy",
            "Favored Enemy",
            "Choose a favored enemy type. You gain a +2 bonus to damage rolls with weapon attacks against \
             creatures of that type, and advantage on checks to track or recall information about them.",
        ),
        class(
            "revised_natural_explorer",
            "Natural Explorer",
            "You ignore difficult terrain, have advantage on initiative rolls, and on your first turn you \
             have advantage on attacks against creatures that have not yet acted.",
        ),
        class(
            "revised_primeval_awareness",
            "Primeval Awareness",
            "You can communicate simple ideas with beasts, and sense the presence of your favored enemies nearby.",
        ),
        class("greater_favored_enemy", "Greater Favored Enemy", "Choose a greater favored enemy type; your damage bonus applies to it as well."),
        class("fleet_of_foot", "Fleet of Foot", "You can use the *Dash* action as a bonus action on your turn."),
        class("hide_in_plain_sight", "Hide in Plain Sight", "You can remain perfectly still for long periods of time to set up ambushes."),
        sub(
            "animal_companion",
            "Animal Companion",
            "You gain a beast companion that accompanies you on your adventures and fights alongside you.",
        )
        .boxed(),
        sub("companions_bond", "Companion's Bond", "Your animal companion gains a variety of benefits while it is linked to you."),
        sub("coordinated_attack", "Coordinated Attack", "When you take the *Attack* action, your companion can use its reaction to make a melee attack."),
    ]
}

fn blood_hunter() -> Vec<FeatureDescriptor> {
    vec![
        class(
            "hunters_bane",
            "Hunter's Bane",
            "You have advantage on Survival checks to track fey, fiends, or undead, and on Intelligence \
             checks to recall information about them.",
        ),
        class(
            "crimson_rite",
            "Crimson Rite",
            "As a bonus action, imbue a weapon with a rite, taking hemocraft damage equal to one roll of \
             your hemocraft die. The weapon deals extra elemental damage while the rite lasts.",
        )
        .boxed(),
        class(
            "blood_maledict",
            "Blood Maledict",
            "You can invoke a blood curse, amplifying it by suffering hemocraft damage.\n\n\
             - *Blood Curse of the Fallen Puppet*\n\
             - *Blood Curse of Binding*",
        )
        .boxed(),
        class("grim_psychometry", "Grim Psychometry", "Advantage on Wisdom (Insight) checks to discern the evil past of an object or place."),
        sub("rite_of_the_dawn", "Rite of the Dawn", "Your crimson rite can deal radiant damage and sheds bright light."),
        sub("heightened_senses", "Heightened Senses", "You have advantage on Wisdom (Perception) checks that rely on hearing or smell."),
        sub(
            "hybrid_transformation",
            "Hybrid Transformation",
            "As a bonus action, you transform into a hybrid lycan form for up to one hour.",
        )
        .boxed(),
        sub("rite_focus", "Rite Focus", "While your rite is active on a weapon, it can serve as your spellcasting focus."),
    ]
}

pub(super) fn sources() -> Vec<StaticSource> {
    vec![
        StaticSource { name: "common", build: common },
        StaticSource { name: "artificer", build: artificer },
        StaticSource { name: "barbarian", build: barbarian },
        StaticSource { name: "bard", build: bard },
        StaticSource { name: "cleric", build: cleric },
        StaticSource { name: "druid", build: druid },
        StaticSource { name: "fighter", build: fighter },
        StaticSource { name: "monk", build: monk },
        StaticSource { name: "paladin", build: paladin },
        StaticSource { name: "ranger", build: ranger },
        StaticSource { name: "rogue", build: rogue },
        StaticSource { name: "sorcerer", build: sorcerer },
        StaticSource { name: "warlock", build: warlock },
        StaticSource { name: "wizard", build: wizard },
        StaticSource { name: "revised_ranger", build: revised_ranger },
        StaticSource { name: "blood_hunter", build: blood_hunter },
    ]
}

/// The supported classes.
pub fn available_classes() -> Vec<ClassDescriptor> {
    vec![
        ClassDescriptor::new(
            "Artificer",
            8,
            &with_asi(&[
                (1, "magical_tinkering"),
                (1, "spellcasting"),
                (2, "infuse_item"),
                (3, "the_right_tool_for_the_job"),
                (6, "tool_expertise"),
                (7, "flash_of_genius"),
            ]),
        )
        .spellcasting(1, "Intelligence")
        .subclass(SubclassDescriptor::new("Alchemist", &[(3, "experimental_elixir"), (5, "alchemical_savant")]))
        .subclass(SubclassDescriptor::new("Battle Smith", &[(3, "steel_defender"), (5, "extra_attack")])),
        ClassDescriptor::new(
            "Barbarian",
            12,
            &with_asi(&[
                (1, "rage"),
                (1, "unarmored_defense"),
                (2, "reckless_attack"),
                (2, "danger_sense"),
                (5, "extra_attack"),
                (5, "fast_movement"),
                (7, "feral_instinct"),
                (9, "brutal_critical"),
            ]),
        )
        .subclass(SubclassDescriptor::new("Path of the Berserker", &[(3, "frenzy"), (6, "mindless_rage")]))
        .subclass(SubclassDescriptor::new(
            "Path of the Totem Warrior",
            &[(3, "totem_spirit"), (6, "aspect_of_the_beast")],
        )),
        ClassDescriptor::new(
            "Bard",
            8,
            &with_asi(&[
                (1, "bardic_inspiration"),
                (1, "spellcasting"),
                (2, "jack_of_all_trades"),
                (2, "song_of_rest"),
                (3, "expertise"),
                (5, "font_of_inspiration"),
                (6, "countercharm"),
            ]),
        )
        .spellcasting(1, "Charisma")
        .subclass(
            SubclassDescriptor::new("College of Lore", &[(3, "cutting_words"), (6, "additional_magical_secrets")])
                .description("Bards of the College of Lore know something about most things."),
        )
        .subclass(SubclassDescriptor::new("College of Valor", &[(3, "combat_inspiration"), (6, "extra_attack")])),
        ClassDescriptor::new(
            "Cleric",
            8,
            &with_asi(&[
                (1, "spellcasting"),
                (2, "channel_divinity"),
                (5, "destroy_undead"),
                (10, "divine_intervention"),
            ]),
        )
        .spellcasting(1, "Wisdom")
        .subclass_level(1)
        .subclass(
            SubclassDescriptor::new("Life Domain", &[(1, "disciple_of_life"), (2, "preserve_life")])
                .description("The Life domain focuses on the vibrant positive energy that sustains all life."),
        )
        .subclass(SubclassDescriptor::new("Light Domain", &[(1, "warding_flare"), (2, "radiance_of_the_dawn")])),
        ClassDescriptor::new(
            "Druid",
            8,
            &with_asi(&[(1, "druidic"), (1, "spellcasting"), (2, "wild_shape"), (18, "timeless_body")]),
        )
        .spellcasting(1, "Wisdom")
        .subclass_level(2)
        .subclass(SubclassDescriptor::new("Circle of the Land", &[(2, "natural_recovery")]))
        .subclass(SubclassDescriptor::new("Circle of the Moon", &[(2, "combat_wild_shape")])),
        ClassDescriptor::new(
            "Fighter",
            10,
            &with_asi(&[
                (1, "fighting_style"),
                (1, "second_wind"),
                (2, "action_surge"),
                (5, "extra_attack"),
                (9, "indomitable"),
            ]),
        )
        .subclass(
            SubclassDescriptor::new("Champion", &[(3, "improved_critical"), (7, "remarkable_athlete")])
                .description("The archetypal Champion focuses on raw physical power honed to deadly perfection."),
        )
        .subclass(
            SubclassDescriptor::new("Eldritch Knight", &[(3, "spellcasting"), (3, "weapon_bond"), (7, "war_magic")])
                .spellcasting_from(3),
        ),
        ClassDescriptor::new(
            "Monk",
            8,
            &with_asi(&[
                (1, "unarmored_defense"),
                (1, "martial_arts"),
                (2, "ki"),
                (2, "unarmored_movement"),
                (3, "deflect_missiles"),
                (4, "slow_fall"),
                (5, "extra_attack"),
                (5, "stunning_strike"),
                (7, "evasion"),
            ]),
        )
        .subclass(SubclassDescriptor::new("Way of the Open Hand", &[(3, "open_hand_technique")]))
        .subclass(SubclassDescriptor::new("Way of Shadow", &[(3, "shadow_arts")])),
        ClassDescriptor::new(
            "Paladin",
            10,
            &with_asi(&[
                (1, "divine_sense"),
                (1, "lay_on_hands"),
                (2, "fighting_style"),
                (2, "spellcasting"),
                (2, "divine_smite"),
                (3, "divine_health"),
                (5, "extra_attack"),
                (6, "aura_of_protection"),
            ]),
        )
        .spellcasting(2, "Charisma")
        .subclass(SubclassDescriptor::new("Oath of Devotion", &[(3, "sacred_weapon")]))
        .subclass(SubclassDescriptor::new("Oath of Vengeance", &[(3, "vow_of_enmity")])),
        ClassDescriptor::new(
            "Ranger",
            10,
            &with_asi(&[
                (1, "favored_enemy"),
                (1, "natural_explorer"),
                (2, "fighting_style"),
                (2, "spellcasting"),
                (3, "primeval_awareness"),
                (5, "extra_attack"),
            ]),
        )
        .spellcasting(2, "Wisdom")
        .subclass(SubclassDescriptor::new("Hunter", &[(3, "hunters_prey")]))
        .subclass(SubclassDescriptor::new("Beast Master", &[(3, "rangers_companion")])),
        ClassDescriptor::new(
            "Rogue",
            8,
            &with_asi(&[
                (1, "expertise"),
                (1, "sneak_attack"),
                (1, "thieves_cant"),
                (2, "cunning_action"),
                (5, "uncanny_dodge"),
                (7, "evasion"),
            ]),
        )
        .subclass(SubclassDescriptor::new("Thief", &[(3, "fast_hands")]))
        .subclass(
            SubclassDescriptor::new("Arcane Trickster", &[(3, "spellcasting"), (3, "mage_hand_legerdemain")])
                .spellcasting_from(3),
        ),
        ClassDescriptor::new(
            "Sorcerer",
            6,
            &with_asi(&[(1, "spellcasting"), (2, "font_of_magic"), (3, "metamagic")]),
        )
        .spellcasting(1, "Charisma")
        .subclass_level(1)
        .subclass(SubclassDescriptor::new("Draconic Bloodline", &[(1, "draconic_resilience")]))
        .subclass(SubclassDescriptor::new("Wild Magic", &[(1, "wild_magic_surge")])),
        ClassDescriptor::new(
            "Warlock",
            8,
            &with_asi(&[(1, "pact_magic"), (2, "eldritch_invocations"), (3, "pact_boon")]),
        )
        .spellcasting(1, "Charisma")
        .subclass_level(1)
        .subclass(SubclassDescriptor::new("The Fiend", &[(1, "dark_ones_blessing")]))
        .subclass(SubclassDescriptor::new("The Archfey", &[(1, "fey_presence")])),
        ClassDescriptor::new(
            "Wizard",
            6,
            &with_asi(&[(1, "spellcasting"), (1, "arcane_recovery"), (18, "spell_mastery")]),
        )
        .spellcasting(1, "Intelligence")
        .subclass_level(2)
        .subclass(SubclassDescriptor::new("School of Evocation", &[(2, "sculpt_spells")]))
        .subclass(SubclassDescriptor::new("School of Abjuration", &[(2, "arcane_ward")])),
        ClassDescriptor::new(
            "Revised Ranger",
            10,
            &with_asi(&[
                (1, "revised_favored_enemy"),
                (1, "revised_natural_explorer"),
                (2, "fighting_style"),
                (2, "spellcasting"),
                (3, "revised_primeval_awareness"),
                (5, "extra_attack"),
                (6, "greater_favored_enemy"),
                (8, "fleet_of_foot"),
                (10, "hide_in_plain_sight"),
            ]),
        )
        .spellcasting(2, "Wisdom")
        .subclass(SubclassDescriptor::new(
            "Beast Conclave",
            &[(3, "animal_companion"), (3, "companions_bond"), (5, "coordinated_attack")],
        ))
        .subclass(SubclassDescriptor::new("Hunter Conclave", &[(3, "hunters_prey")])),
        ClassDescriptor::new(
            "Blood Hunter",
            10,
            &with_asi(&[
                (1, "hunters_bane"),
                (1, "blood_maledict"),
                (2, "fighting_style"),
                (2, "crimson_rite"),
                (5, "extra_attack"),
                (9, "grim_psychometry"),
            ]),
        )
        .subclass(SubclassDescriptor::new("Order of the Ghostslayer", &[(3, "rite_of_the_dawn")]))
        .subclass(SubclassDescriptor::new(
            "Order of the Lycan",
            &[(3, "heightened_senses"), (3, "hybrid_transformation")],
        ))
        .subclass(
            SubclassDescriptor::new("Order of the Profane Soul", &[(3, "pact_magic"), (3, "rite_focus")])
                .spellcasting_from(3),
        ),
    ]
}
