//! Application state and composition.

use std::sync::Arc;

use questbound_domain::{
    AttributeProposal, Character, CharacterId, ProgressionSettings, QuestAction, QuestId,
    SkillId,
};

use crate::infrastructure::ports::{ClockPort, ProgressionStore};
use crate::use_cases::character::{
    CharacterCreation, Dashboard, Inventory, Leaderboard, ReallocateAttributes,
};
use crate::use_cases::quest::{CreateQuest, QuestBoard, QuestLifecycle, QuestProgressOutcome};
use crate::use_cases::skill::{CreateSkill, RemoveSkill, SkillUpgradeOutcome, UpgradeSkill};
use crate::use_cases::{self, ProgressionError};

/// Main application state.
///
/// Built once from a store and a clock; everything else is wired here.
pub struct App {
    pub store: Arc<dyn ProgressionStore>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub quest: use_cases::QuestUseCases,
    pub skill: use_cases::SkillUseCases,
    pub character: use_cases::CharacterUseCases,
}

impl App {
    pub fn new(
        store: Arc<dyn ProgressionStore>,
        clock: Arc<dyn ClockPort>,
        settings: ProgressionSettings,
        leaderboard_size: u32,
    ) -> Self {
        let quest = use_cases::QuestUseCases::new(
            Arc::new(QuestLifecycle::new(store.clone(), clock.clone(), settings)),
            Arc::new(CreateQuest::new(store.clone(), clock.clone())),
            Arc::new(QuestBoard::new(store.clone())),
        );

        let skill = use_cases::SkillUseCases::new(
            Arc::new(UpgradeSkill::new(
                store.clone(),
                clock.clone(),
                settings.level_up,
            )),
            Arc::new(RemoveSkill::new(store.clone())),
            Arc::new(CreateSkill::new(store.clone(), clock.clone())),
        );

        let character = use_cases::CharacterUseCases::new(
            Arc::new(CharacterCreation::new(store.clone(), clock.clone())),
            Arc::new(ReallocateAttributes::new(store.clone(), clock)),
            Arc::new(Dashboard::new(store.clone())),
            Arc::new(Inventory::new(store.clone())),
            Arc::new(Leaderboard::new(store.clone(), leaderboard_size)),
        );

        Self {
            store,
            use_cases: UseCases {
                quest,
                skill,
                character,
            },
        }
    }

    // Operations exposed to the transport layer. Each one acts as
    // `character_id`; records owned by anyone else are not found.

    pub async fn accept_quest(
        &self,
        character_id: CharacterId,
        quest_id: QuestId,
    ) -> Result<QuestProgressOutcome, ProgressionError> {
        self.use_cases
            .quest
            .lifecycle
            .execute(character_id, quest_id, QuestAction::Accept)
            .await
    }

    pub async fn progress_quest(
        &self,
        character_id: CharacterId,
        quest_id: QuestId,
    ) -> Result<QuestProgressOutcome, ProgressionError> {
        self.use_cases
            .quest
            .lifecycle
            .execute(character_id, quest_id, QuestAction::RecordProgress)
            .await
    }

    pub async fn cancel_quest(
        &self,
        character_id: CharacterId,
        quest_id: QuestId,
    ) -> Result<QuestProgressOutcome, ProgressionError> {
        self.use_cases
            .quest
            .lifecycle
            .execute(character_id, quest_id, QuestAction::Cancel)
            .await
    }

    pub async fn upgrade_skill(
        &self,
        character_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<SkillUpgradeOutcome, ProgressionError> {
        self.use_cases
            .skill
            .upgrade
            .execute(character_id, skill_id)
            .await
    }

    pub async fn remove_skill(
        &self,
        character_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<(), ProgressionError> {
        self.use_cases
            .skill
            .remove
            .execute(character_id, skill_id)
            .await
    }

    pub async fn reallocate_attributes(
        &self,
        character_id: CharacterId,
        proposal: AttributeProposal,
    ) -> Result<Character, ProgressionError> {
        self.use_cases
            .character
            .reallocate
            .execute(character_id, proposal)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryStore;
    use crate::test_fixtures::clock;
    use crate::use_cases::character::{CreateCharacterInput, DEFAULT_LEADERBOARD_SIZE};
    use crate::use_cases::quest::{CreateQuestInput, RewardInput};
    use crate::use_cases::skill::CreateSkillInput;
    use questbound_domain::{ItemStatus, QuestStatus, UserId};

    fn app() -> App {
        App::new(
            Arc::new(InMemoryStore::new()),
            clock(),
            ProgressionSettings::default(),
            DEFAULT_LEADERBOARD_SIZE,
        )
    }

    #[tokio::test]
    async fn player_journey_through_the_facade() {
        let app = app();
        let user_id = UserId::new();
        let character = app
            .use_cases
            .character
            .create
            .execute(
                user_id,
                CreateCharacterInput {
                    name: "Sela".to_string(),
                    class: "ROGUE".to_string(),
                    strength: 5,
                    intelligence: 5,
                    endurance: 10,
                },
            )
            .await
            .unwrap();

        let quest = app
            .use_cases
            .quest
            .create
            .execute(
                character.id,
                CreateQuestInput {
                    title: "Steal the ledger".to_string(),
                    description: "The guildmaster keeps it under the altar".to_string(),
                    difficulty: "A".to_string(),
                    rewards: vec![RewardInput {
                        name: "Lockpick".to_string(),
                        description: Some("Opens simple locks".to_string()),
                        quantity: 3,
                    }],
                },
            )
            .await
            .unwrap();

        app.accept_quest(character.id, quest.id).await.unwrap();
        let mut last = None;
        for _ in 0..4 {
            last = Some(app.progress_quest(character.id, quest.id).await.unwrap());
        }
        let outcome = last.unwrap();
        assert!(outcome.completed());
        assert!(!outcome.leveled_up());
        assert_eq!(
            outcome.notifications(),
            vec!["Quest completed. You got 1000 XP + x3 Lockpick"]
        );

        let skill = app
            .use_cases
            .skill
            .create
            .execute(
                character.id,
                CreateSkillInput {
                    name: "Shadowstep".to_string(),
                    description: "Vanish and reappear behind a foe".to_string(),
                    max_level: 3,
                },
            )
            .await
            .unwrap();
        app.upgrade_skill(character.id, skill.id).await.unwrap();

        let dashboard = app
            .use_cases
            .character
            .dashboard
            .load(user_id)
            .await
            .unwrap();
        assert_eq!(dashboard.character.experience, 1_020);
        assert_eq!(dashboard.experience_percentage, 51);
        assert_eq!(dashboard.quests.completed, 1);
        assert_eq!(dashboard.items[0].name.as_str(), "Lockpick");
        assert_eq!(dashboard.items[0].status, ItemStatus::Completed);
        assert_eq!(
            dashboard.items[0].description.as_deref(),
            Some("Opens simple locks")
        );
        assert_eq!(dashboard.skills[0].level, 2);

        let board = app
            .use_cases
            .quest
            .board
            .grouped(character.id)
            .await
            .unwrap();
        assert_eq!(board.completed.len(), 1);
        assert_eq!(board.completed[0].status, QuestStatus::Completed);

        app.remove_skill(character.id, skill.id).await.unwrap();
        let leaderboard = app
            .use_cases
            .character
            .leaderboard
            .load(user_id)
            .await
            .unwrap();
        assert_eq!(leaderboard.own_rank, Some(1));
        assert_eq!(leaderboard.entries[0].completed_quests, 1);
    }

    #[tokio::test]
    async fn reallocation_goes_through_the_facade() {
        let app = app();
        let result = app
            .reallocate_attributes(
                CharacterId::new(),
                AttributeProposal {
                    strength: 5,
                    intelligence: 5,
                    endurance: 5,
                    available_points: 0,
                },
            )
            .await;
        assert!(matches!(result, Err(ProgressionError::NotFound { .. })));
    }
}
