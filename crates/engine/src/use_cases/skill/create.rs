//! Skill creation.

use std::sync::Arc;

use serde::Deserialize;

use questbound_domain::{CharacterId, Skill, SkillName};

use crate::infrastructure::ports::{ClockPort, ProgressionStore};
use crate::use_cases::error::ProgressionError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillInput {
    pub name: String,
    pub description: String,
    pub max_level: u32,
}

pub struct CreateSkill {
    store: Arc<dyn ProgressionStore>,
    clock: Arc<dyn ClockPort>,
}

impl CreateSkill {
    pub fn new(store: Arc<dyn ProgressionStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    pub async fn execute(
        &self,
        character_id: CharacterId,
        input: CreateSkillInput,
    ) -> Result<Skill, ProgressionError> {
        let name = SkillName::new(input.name)?;
        let skill = Skill::new(
            character_id,
            name,
            input.description,
            input.max_level,
            self.clock.now(),
        )?;

        let mut uow = self.store.begin().await?;
        if uow.get_character(character_id).await?.is_none() {
            return Err(ProgressionError::not_found("Character", character_id));
        }
        uow.insert_skill(&skill).await?;
        uow.commit().await?;

        tracing::info!(
            skill_id = %skill.id,
            character_id = %character_id,
            max_level = skill.max_level,
            "Skill created"
        );
        Ok(skill)
    }
}
