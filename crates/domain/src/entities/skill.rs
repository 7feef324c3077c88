//! Skill entity - a levelled ability owned by a character

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{validate_description, SkillName, MIN_DESCRIPTION_LENGTH};
use crate::{CharacterId, SkillId};

/// Bounds for a skill's `max_level` at creation.
pub const MIN_SKILL_MAX_LEVEL: u32 = 2;
pub const MAX_SKILL_MAX_LEVEL: u32 = 100;

/// Experience a character earns per skill upgrade.
pub const SKILL_UPGRADE_EXPERIENCE: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub character_id: CharacterId,
    pub name: SkillName,
    pub description: String,
    /// Always `1..=max_level`.
    pub level: u32,
    pub max_level: u32,
    pub created_at: DateTime<Utc>,
}

impl Skill {
    pub fn new(
        character_id: CharacterId,
        name: SkillName,
        description: impl Into<String>,
        max_level: u32,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let description = validate_description(description, "Description", MIN_DESCRIPTION_LENGTH)?;
        if !(MIN_SKILL_MAX_LEVEL..=MAX_SKILL_MAX_LEVEL).contains(&max_level) {
            return Err(DomainError::validation(format!(
                "Max level must be between {MIN_SKILL_MAX_LEVEL} and {MAX_SKILL_MAX_LEVEL}"
            )));
        }
        Ok(Self {
            id: SkillId::new(),
            character_id,
            name,
            description,
            level: 1,
            max_level,
            created_at: now,
        })
    }

    pub fn is_maxed(&self) -> bool {
        self.level >= self.max_level
    }

    /// Raise the skill one level. Returns the new level.
    pub fn upgrade(&mut self) -> Result<u32, DomainError> {
        if self.is_maxed() {
            return Err(DomainError::MaxLevelReached {
                level: self.level,
                max_level: self.max_level,
            });
        }
        self.level += 1;
        Ok(self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(max_level: u32) -> Skill {
        Skill::new(
            CharacterId::new(),
            SkillName::new("Fireball").unwrap(),
            "Hurls a ball of flame",
            max_level,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn upgrade_stops_at_max_level() {
        let mut s = skill(2);
        assert_eq!(s.upgrade().unwrap(), 2);
        assert!(s.is_maxed());

        let err = s.upgrade().unwrap_err();
        assert_eq!(err, DomainError::MaxLevelReached { level: 2, max_level: 2 });
        assert_eq!(s.level, 2);
    }

    #[test]
    fn max_level_must_be_in_range() {
        let name = || SkillName::new("Stealth").unwrap();
        let id = CharacterId::new();
        assert!(Skill::new(id, name(), "Move without a sound", 1, Utc::now()).is_err());
        assert!(Skill::new(id, name(), "Move without a sound", 101, Utc::now()).is_err());
        assert!(Skill::new(id, name(), "Move without a sound", 100, Utc::now()).is_ok());
    }

    #[test]
    fn short_description_is_rejected() {
        let err = Skill::new(
            CharacterId::new(),
            SkillName::new("Stealth").unwrap(),
            "sneaky",
            10,
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
