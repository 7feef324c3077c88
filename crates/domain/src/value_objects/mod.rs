//! Value objects - immutable, validated-on-construction domain values.

mod attributes;
mod names;
mod quantity;

pub use attributes::{
    AttributePoints, AttributeProposal, INITIAL_ATTRIBUTE_TOTAL, MIN_INITIAL_ATTRIBUTE,
};
pub use names::{
    validate_description, CharacterName, ItemName, QuestTitle, SkillName, MIN_DESCRIPTION_LENGTH,
    MIN_NAME_LENGTH,
};
pub use quantity::Quantity;
