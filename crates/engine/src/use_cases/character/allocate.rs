//! Attribute point reallocation.

use std::sync::Arc;

use questbound_domain::{validate_reallocation, AttributeProposal, Character, CharacterId};

use crate::infrastructure::ports::{ClockPort, ProgressionStore};
use crate::use_cases::error::ProgressionError;

pub struct ReallocateAttributes {
    store: Arc<dyn ProgressionStore>,
    clock: Arc<dyn ClockPort>,
}

impl ReallocateAttributes {
    pub fn new(store: Arc<dyn ProgressionStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    /// Validate `proposal` against the stored attributes and persist it.
    ///
    /// A rejected proposal writes nothing.
    pub async fn execute(
        &self,
        character_id: CharacterId,
        proposal: AttributeProposal,
    ) -> Result<Character, ProgressionError> {
        let mut uow = self.store.begin().await?;
        let mut character = uow
            .get_character(character_id)
            .await?
            .ok_or_else(|| ProgressionError::not_found("Character", character_id))?;

        let delta = match validate_reallocation(&character.attributes, &proposal) {
            Ok(delta) => delta,
            Err(e) => {
                tracing::warn!(character_id = %character_id, error = %e, "Reallocation rejected");
                return Err(e.into());
            }
        };

        character.set_attributes(delta.resulting, self.clock.now());
        character.version = uow.update_character(&character).await?;
        uow.commit().await?;

        tracing::info!(
            character_id = %character_id,
            spent = delta.spent(),
            remaining = character.attributes.available_points,
            "Attributes reallocated"
        );
        Ok(character)
    }
}
