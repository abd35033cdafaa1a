use crate::feature::{FeatureDescriptor, SourceCategory};

fn background(key: &str, name: &str, description: &str) -> FeatureDescriptor {
    FeatureDescriptor::new(key, name, SourceCategory::Background).description(description)
}

pub(super) fn features() -> Vec<FeatureDescriptor> {
    vec![
        background(
            "acolyte",
            "Shelter of the Faithful",
            "You and your companions can expect free healing and care at a temple, shrine, \
             or other established presence of your faith.",
        ),
        background(
            "criminal",
            "Criminal Contact",
            "You have a reliable and trustworthy contact who acts as your liaison to a network of other criminals.",
        ),
        background(
            "folk_hero",
            "Rustic Hospitality",
            "Common folk will shelter you from the law or anyone else searching for you.",
        ),
        background(
            "noble",
            "Position of Privilege",
            "You are welcome in high society, and people assume you have the right to be wherever you are.",
        ),
        background(
            "sage",
            "Researcher",
            "When you attempt to learn or recall a piece of lore, you often know where and from whom you can obtain it.",
        ),
        background(
            "soldier",
            "Military Rank",
            "Soldiers loyal to your former military organization still recognize your authority and influence.",
        ),
        background(
            "outlander",
            "Wanderer",
            "You have an excellent memory for maps and geography, and can find food and fresh water for up to \
             five people each day.",
        ),
        background(
            "entertainer",
            "By Popular Demand",
            "You can always find a place to perform, where you receive free lodging and food.",
        ),
    ]
}
