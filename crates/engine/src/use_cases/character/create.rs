//! Character creation.

use std::sync::Arc;

use serde::Deserialize;

use questbound_domain::{AttributePoints, Character, CharacterClass, CharacterName, UserId};

use crate::infrastructure::ports::{ClockPort, ProgressionStore, RepoError};
use crate::use_cases::error::ProgressionError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacterInput {
    pub name: String,
    /// `WARRIOR`, `MAGE` or `ROGUE`.
    pub class: String,
    pub strength: u32,
    pub intelligence: u32,
    pub endurance: u32,
}

pub struct CharacterCreation {
    store: Arc<dyn ProgressionStore>,
    clock: Arc<dyn ClockPort>,
}

impl CharacterCreation {
    pub fn new(store: Arc<dyn ProgressionStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    /// Create the single character a user may own.
    pub async fn execute(
        &self,
        user_id: UserId,
        input: CreateCharacterInput,
    ) -> Result<Character, ProgressionError> {
        let name = CharacterName::new(input.name)?;
        let class: CharacterClass = input.class.parse()?;
        let attributes =
            AttributePoints::initial(input.strength, input.intelligence, input.endurance)?;

        if self.store.get_character_by_user(user_id).await?.is_some() {
            tracing::warn!(user_id = %user_id, "User already owns a character");
            return Err(ProgressionError::validation("User already has a character"));
        }

        let character = Character::new(user_id, name, class, attributes, self.clock.now());
        let mut uow = self.store.begin().await?;
        match uow.insert_character(&character).await {
            Ok(()) => {}
            // Lost a race with another creation for the same user.
            Err(RepoError::ConstraintViolation(_)) => {
                tracing::warn!(user_id = %user_id, "User already owns a character");
                return Err(ProgressionError::validation("User already has a character"));
            }
            Err(e) => return Err(e.into()),
        }
        uow.commit().await?;

        tracing::info!(
            character_id = %character.id,
            user_id = %user_id,
            class = %character.class,
            "Character created"
        );
        Ok(character)
    }
}
