//! Domain entities

mod character;
mod item;
mod quest;
mod skill;

pub use character::{Character, CharacterClass, DEFAULT_LEVEL_CEILING, INITIAL_MAX_EXP_NEEDED};
pub use item::{Item, ItemStatus};
pub use quest::{
    Difficulty, Quest, QuestAction, QuestStatus, QuestTransition, CANCELLED_BY_PLAYER_REASON,
    PROGRESS_COMPLETE, PROGRESS_STEP,
};
pub use skill::{Skill, MAX_SKILL_MAX_LEVEL, MIN_SKILL_MAX_LEVEL, SKILL_UPGRADE_EXPERIENCE};
