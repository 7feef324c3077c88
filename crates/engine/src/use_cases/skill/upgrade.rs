//! Skill upgrades.
//!
//! One level per call, and every level earns the owning character a fixed
//! experience bonus through the same leveling path quests use.

use std::sync::Arc;

use questbound_domain::{
    Character, CharacterId, ExperienceOutcome, LevelUpPolicy, Skill, SkillId,
    SKILL_UPGRADE_EXPERIENCE,
};

use crate::infrastructure::ports::{ClockPort, ProgressionStore};
use crate::use_cases::error::ProgressionError;
use crate::use_cases::experience::GrantExperience;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillUpgradeOutcome {
    pub skill: Skill,
    pub character: Character,
    pub experience: ExperienceOutcome,
}

impl SkillUpgradeOutcome {
    pub fn leveled_up(&self) -> bool {
        self.experience.leveled_up()
    }

    pub fn notifications(&self) -> Vec<String> {
        let mut messages = vec![format!(
            "Skill upgraded successfully. (+{SKILL_UPGRADE_EXPERIENCE} EXP)"
        )];
        if self.leveled_up() {
            messages.push(self.character.level_up_message());
        }
        messages
    }
}

pub struct UpgradeSkill {
    store: Arc<dyn ProgressionStore>,
    clock: Arc<dyn ClockPort>,
    experience: GrantExperience,
}

impl UpgradeSkill {
    pub fn new(
        store: Arc<dyn ProgressionStore>,
        clock: Arc<dyn ClockPort>,
        level_up: LevelUpPolicy,
    ) -> Self {
        Self {
            store,
            clock,
            experience: GrantExperience::new(level_up),
        }
    }

    pub async fn execute(
        &self,
        character_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<SkillUpgradeOutcome, ProgressionError> {
        let now = self.clock.now();
        let mut uow = self.store.begin().await?;

        let mut skill = uow
            .get_skill(skill_id)
            .await?
            .filter(|skill| skill.character_id == character_id)
            .ok_or_else(|| ProgressionError::not_found("Skill", skill_id))?;

        if let Err(e) = skill.upgrade() {
            tracing::warn!(
                skill_id = %skill_id,
                level = skill.level,
                max_level = skill.max_level,
                "Skill upgrade refused at max level"
            );
            return Err(e.into());
        }
        uow.update_skill(&skill).await?;

        let (character, experience) = self
            .experience
            .execute(uow.as_mut(), skill.character_id, SKILL_UPGRADE_EXPERIENCE, now)
            .await?;

        uow.commit().await?;

        tracing::info!(
            skill_id = %skill.id,
            character_id = %skill.character_id,
            level = skill.level,
            "Skill upgraded"
        );

        Ok(SkillUpgradeOutcome {
            skill,
            character,
            experience,
        })
    }
}
