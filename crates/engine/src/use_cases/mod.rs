//! Use cases - player-facing progression operations.
//!
//! Every operation that writes runs in one unit of work opened from the
//! store. `experience` and `rewards` are the shared steps those operations
//! compose; they never open or commit a unit of work themselves.

pub mod character;
pub mod error;
pub mod experience;
pub mod quest;
pub mod rewards;
pub mod skill;

pub use character::CharacterUseCases;
pub use error::ProgressionError;
pub use quest::QuestUseCases;
pub use skill::SkillUseCases;
