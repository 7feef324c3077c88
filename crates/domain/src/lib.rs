extern crate self as questbound_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod progression;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    Character, CharacterClass, Difficulty, Item, ItemStatus, Quest, QuestAction, QuestStatus,
    QuestTransition, Skill, CANCELLED_BY_PLAYER_REASON, DEFAULT_LEVEL_CEILING,
    INITIAL_MAX_EXP_NEEDED, MAX_SKILL_MAX_LEVEL, MIN_SKILL_MAX_LEVEL, PROGRESS_COMPLETE,
    PROGRESS_STEP, SKILL_UPGRADE_EXPERIENCE,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{CharacterId, ItemId, QuestId, SkillId, UserId};

// Re-export the progression engines
pub use progression::{
    apply_experience, validate_reallocation, AllocationDelta, AllocationError, AttributeKind,
    CancelledRewardPolicy, ExperienceOutcome, LevelUpPolicy, ProgressSnapshot,
    ProgressionSettings, AVAILABLE_POINTS_PER_LEVEL, LEVEL_THRESHOLD_GROWTH_DENOMINATOR,
    LEVEL_THRESHOLD_GROWTH_NUMERATOR,
};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    validate_description, AttributePoints, AttributeProposal, CharacterName, ItemName, Quantity,
    QuestTitle, SkillName, MIN_DESCRIPTION_LENGTH,
};
