//! The fixed set of question category tags.

/// The 12 category tags the classifier is instructed to choose from.
pub const CATEGORY_TAGS: [&str; 12] = [
    "basics",
    "sensory",
    "communication",
    "school",
    "emotions",
    "social",
    "daily",
    "interests",
    "parent",
    "therapy",
    "teens",
    "legal",
];

/// True if `tag` is one of the 12 known category tags.
pub fn is_known_tag(tag: &str) -> bool {
    CATEGORY_TAGS.contains(&tag)
}
