//! Experience grants inside a unit of work.

use chrono::{DateTime, Utc};
use questbound_domain::{Character, CharacterId, ExperienceOutcome, LevelUpPolicy};

use crate::infrastructure::ports::UnitOfWork;

use super::error::ProgressionError;

/// Loads a character, applies an experience grant and writes it back.
///
/// Shared by quest completion and skill upgrades so both level the same way.
#[derive(Debug, Clone, Copy)]
pub struct GrantExperience {
    policy: LevelUpPolicy,
}

impl GrantExperience {
    pub fn new(policy: LevelUpPolicy) -> Self {
        Self { policy }
    }

    pub async fn execute(
        &self,
        uow: &mut dyn UnitOfWork,
        character_id: CharacterId,
        amount: u64,
        now: DateTime<Utc>,
    ) -> Result<(Character, ExperienceOutcome), ProgressionError> {
        let mut character = uow
            .get_character(character_id)
            .await?
            .ok_or_else(|| ProgressionError::not_found("Character", character_id))?;

        let outcome = character.gain_experience(amount, self.policy, now);
        character.version = uow.update_character(&character).await?;

        if outcome.leveled_up() {
            tracing::info!(
                character_id = %character_id,
                level = character.level,
                levels_gained = outcome.levels_gained,
                "Character leveled up"
            );
        } else {
            tracing::debug!(
                character_id = %character_id,
                experience = character.experience,
                uncapped = character.max_exp_needed == 0,
                "Experience granted"
            );
        }

        Ok((character, outcome))
    }
}
