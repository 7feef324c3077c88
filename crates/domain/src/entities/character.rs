//! Character entity - the player-owned progression root
//!
//! A user owns exactly one character. Quests, items and skills all hang off
//! it, and every progression change that touches them also rewrites the
//! character in the same unit of work.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::progression::{apply_experience, ExperienceOutcome, LevelUpPolicy, ProgressSnapshot};
use crate::value_objects::{AttributePoints, CharacterName};
use crate::{CharacterId, UserId, AVAILABLE_POINTS_PER_LEVEL};

/// Experience needed for the first level-up.
pub const INITIAL_MAX_EXP_NEEDED: u64 = 2000;

/// Level ceiling given to new characters.
pub const DEFAULT_LEVEL_CEILING: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warrior => write!(f, "WARRIOR"),
            Self::Mage => write!(f, "MAGE"),
            Self::Rogue => write!(f, "ROGUE"),
        }
    }
}

impl FromStr for CharacterClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WARRIOR" => Ok(Self::Warrior),
            "MAGE" => Ok(Self::Mage),
            "ROGUE" => Ok(Self::Rogue),
            _ => Err(DomainError::validation("Invalid class")),
        }
    }
}

/// A player's character.
///
/// # Versioning
///
/// `version` is owned by the store. Use cases read it with the snapshot and
/// hand it back unchanged on update; a store refuses the write when the row
/// moved on in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub user_id: UserId,
    pub name: CharacterName,
    pub class: CharacterClass,
    pub level: u32,
    pub experience: u64,
    /// Experience total for the next level; `0` once the ceiling is passed.
    pub max_exp_needed: u64,
    pub max_level_reached: u32,
    pub attributes: AttributePoints,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    pub fn new(
        user_id: UserId,
        name: CharacterName,
        class: CharacterClass,
        attributes: AttributePoints,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CharacterId::new(),
            user_id,
            name,
            class,
            level: 1,
            experience: 0,
            max_exp_needed: INITIAL_MAX_EXP_NEEDED,
            max_level_reached: DEFAULT_LEVEL_CEILING,
            attributes,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            level: self.level,
            experience: self.experience,
            available_points: self.attributes.available_points,
            max_exp_needed: self.max_exp_needed,
            max_level_reached: self.max_level_reached,
        }
    }

    /// Grant experience and write the resulting progress back.
    pub fn gain_experience(
        &mut self,
        experience_gained: u64,
        policy: LevelUpPolicy,
        now: DateTime<Utc>,
    ) -> ExperienceOutcome {
        let outcome = apply_experience(self.progress(), experience_gained, policy);
        let next = outcome.progress;
        self.level = next.level;
        self.experience = next.experience;
        self.attributes.available_points = next.available_points;
        self.max_exp_needed = next.max_exp_needed;
        self.updated_at = now;
        outcome
    }

    pub fn set_attributes(&mut self, attributes: AttributePoints, now: DateTime<Utc>) {
        self.attributes = attributes;
        self.updated_at = now;
    }

    /// Fill level of the experience bar, 0..=100.
    pub fn experience_percentage(&self) -> u8 {
        if self.max_exp_needed == 0 {
            return 100;
        }
        let pct = self.experience.saturating_mul(100) / self.max_exp_needed;
        u8::try_from(pct.min(100)).unwrap_or(100)
    }

    pub fn level_up_message(&self) -> String {
        format!(
            "Level Up! {} has reached level {} and gained {} attribute points!",
            self.name, self.level, AVAILABLE_POINTS_PER_LEVEL
        )
    }
}
