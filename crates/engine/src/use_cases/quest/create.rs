//! Quest creation with escrowed rewards.

use std::sync::Arc;

use serde::Deserialize;

use questbound_domain::{
    validate_description, CharacterId, Difficulty, Item, ItemName, Quantity, Quest, QuestTitle,
    MIN_DESCRIPTION_LENGTH,
};

use crate::infrastructure::ports::{ClockPort, ProgressionStore};
use crate::use_cases::error::ProgressionError;

#[derive(Debug, Clone, Deserialize)]
pub struct RewardInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestInput {
    pub title: String,
    pub description: String,
    /// One of `E`, `D`, `C`, `B`, `A`.
    pub difficulty: String,
    pub rewards: Vec<RewardInput>,
}

struct RewardRow {
    name: ItemName,
    description: Option<String>,
    quantity: Quantity,
}

pub struct CreateQuest {
    store: Arc<dyn ProgressionStore>,
    clock: Arc<dyn ClockPort>,
}

impl CreateQuest {
    pub fn new(store: Arc<dyn ProgressionStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    /// Create an AVAILABLE quest and one PENDING item per reward row.
    pub async fn execute(
        &self,
        character_id: CharacterId,
        input: CreateQuestInput,
    ) -> Result<Quest, ProgressionError> {
        let title = QuestTitle::new(input.title)?;
        let description =
            validate_description(input.description, "Description", MIN_DESCRIPTION_LENGTH)?;
        let difficulty: Difficulty = input.difficulty.parse()?;

        if input.rewards.is_empty() {
            return Err(ProgressionError::validation(
                "A quest needs at least one reward item",
            ));
        }
        let rewards = input
            .rewards
            .into_iter()
            .map(|r| {
                Ok(RewardRow {
                    name: ItemName::new(r.name)?,
                    description: r.description,
                    quantity: Quantity::new(r.quantity)?,
                })
            })
            .collect::<Result<Vec<_>, ProgressionError>>()?;

        let now = self.clock.now();
        let mut uow = self.store.begin().await?;
        if uow.get_character(character_id).await?.is_none() {
            return Err(ProgressionError::not_found("Character", character_id));
        }

        let summary: Vec<(ItemName, Quantity)> = rewards
            .iter()
            .map(|r| (r.name.clone(), r.quantity))
            .collect();
        let reward = Quest::describe_reward(difficulty, &summary);
        let quest = Quest::new(character_id, title, description, difficulty, reward, now);
        uow.insert_quest(&quest).await?;
        for row in rewards {
            let item = Item::pending_reward(
                character_id,
                quest.id,
                row.name,
                row.description,
                row.quantity,
            );
            uow.insert_item(&item).await?;
        }
        uow.commit().await?;

        tracing::info!(
            quest_id = %quest.id,
            character_id = %character_id,
            difficulty = %quest.difficulty,
            "Quest created"
        );
        Ok(quest)
    }
}
