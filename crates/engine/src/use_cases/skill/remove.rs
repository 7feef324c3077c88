//! Skill removal.

use std::sync::Arc;

use questbound_domain::{CharacterId, SkillId};

use crate::infrastructure::ports::ProgressionStore;
use crate::use_cases::error::ProgressionError;

/// Deletes a skill of the acting character. The character itself is left untouched.
pub struct RemoveSkill {
    store: Arc<dyn ProgressionStore>,
}

impl RemoveSkill {
    pub fn new(store: Arc<dyn ProgressionStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        character_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<(), ProgressionError> {
        let mut uow = self.store.begin().await?;
        let skill = uow
            .get_skill(skill_id)
            .await?
            .filter(|skill| skill.character_id == character_id)
            .ok_or_else(|| ProgressionError::not_found("Skill", skill_id))?;

        uow.delete_skill(skill.id).await?;
        uow.commit().await?;

        tracing::info!(
            skill_id = %skill.id,
            character_id = %skill.character_id,
            "Skill removed"
        );
        Ok(())
    }
}
