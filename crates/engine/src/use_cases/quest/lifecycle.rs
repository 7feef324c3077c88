//! Quest lifecycle use case.
//!
//! Accept, record progress and cancel, each as one unit of work. When a
//! quest completes, its rewards are reconciled before the character's
//! experience is touched.

use std::sync::Arc;

use questbound_domain::{
    Character, CharacterId, ExperienceOutcome, ProgressionSettings, Quest, QuestAction, QuestId,
    QuestTransition,
};

use crate::infrastructure::ports::{ClockPort, ProgressionStore};
use crate::use_cases::error::ProgressionError;
use crate::use_cases::experience::GrantExperience;
use crate::use_cases::rewards::{RewardReconciliation, RewardSummary};

/// Level-up data attached to a completed quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRewards {
    pub character: Character,
    pub experience: ExperienceOutcome,
    pub items: RewardSummary,
}

/// Result of a successful quest action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestProgressOutcome {
    pub quest: Quest,
    pub transition: QuestTransition,
    /// Present only when the quest completed.
    pub rewards: Option<CompletionRewards>,
}

impl QuestProgressOutcome {
    pub fn completed(&self) -> bool {
        self.transition == QuestTransition::Completed
    }

    pub fn leveled_up(&self) -> bool {
        self.rewards
            .as_ref()
            .is_some_and(|r| r.experience.leveled_up())
    }

    /// Player-facing messages, in display order.
    pub fn notifications(&self) -> Vec<String> {
        match self.transition {
            QuestTransition::Accepted => vec!["Quest accepted.".to_string()],
            QuestTransition::Progressed { .. } => vec!["Progress updated.".to_string()],
            QuestTransition::Cancelled => vec!["Quest has been cancelled.".to_string()],
            QuestTransition::Completed => {
                let mut messages = vec![format!("Quest completed. You got {}", self.quest.reward)];
                if let Some(rewards) = self.rewards.as_ref().filter(|r| r.experience.leveled_up()) {
                    messages.push(rewards.character.level_up_message());
                }
                messages
            }
        }
    }
}

pub struct QuestLifecycle {
    store: Arc<dyn ProgressionStore>,
    clock: Arc<dyn ClockPort>,
    rewards: RewardReconciliation,
    experience: GrantExperience,
}

impl QuestLifecycle {
    pub fn new(
        store: Arc<dyn ProgressionStore>,
        clock: Arc<dyn ClockPort>,
        settings: ProgressionSettings,
    ) -> Self {
        Self {
            store,
            clock,
            rewards: RewardReconciliation::new(settings.cancelled_rewards),
            experience: GrantExperience::new(settings.level_up),
        }
    }

    /// Apply `action` on behalf of `character_id`. A quest owned by another
    /// character is reported as not found.
    pub async fn execute(
        &self,
        character_id: CharacterId,
        quest_id: QuestId,
        action: QuestAction,
    ) -> Result<QuestProgressOutcome, ProgressionError> {
        let now = self.clock.now();
        let mut uow = self.store.begin().await?;

        let mut quest = uow
            .get_quest(quest_id)
            .await?
            .filter(|quest| quest.character_id == character_id)
            .ok_or_else(|| {
                tracing::warn!(
                    quest_id = %quest_id,
                    character_id = %character_id,
                    "Quest not found for acting character"
                );
                ProgressionError::not_found("Quest", quest_id)
            })?;

        let transition = match quest.apply(action, now) {
            Ok(transition) => transition,
            Err(e) => {
                tracing::warn!(
                    quest_id = %quest_id,
                    action = %action,
                    status = %quest.status,
                    "Quest action rejected"
                );
                return Err(e.into());
            }
        };
        quest.version = uow.update_quest(&quest).await?;

        let rewards = match transition {
            QuestTransition::Completed => {
                let items = self
                    .rewards
                    .on_complete(uow.as_mut(), quest.character_id, quest.id)
                    .await?;
                let (character, experience) = self
                    .experience
                    .execute(
                        uow.as_mut(),
                        quest.character_id,
                        quest.difficulty.experience_reward(),
                        now,
                    )
                    .await?;
                Some(CompletionRewards {
                    character,
                    experience,
                    items,
                })
            }
            QuestTransition::Cancelled => {
                self.rewards.on_cancel(uow.as_mut(), quest.id).await?;
                None
            }
            QuestTransition::Accepted | QuestTransition::Progressed { .. } => None,
        };

        uow.commit().await?;

        tracing::info!(
            quest_id = %quest.id,
            character_id = %quest.character_id,
            action = %action,
            status = %quest.status,
            progress = quest.progress,
            "Quest action applied"
        );

        Ok(QuestProgressOutcome {
            quest,
            transition,
            rewards,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryStore;
    use crate::infrastructure::ports::{
        MockProgressionStore, MockUnitOfWork, RepoError, UnitOfWork,
    };
    use crate::test_fixtures::{
        character_for, clock, completed_item, pending_item, quest_for, seed, Seed,
    };
    use mockall::Sequence;
    use questbound_domain::{
        CancelledRewardPolicy, Difficulty, Item, ItemStatus, LevelUpPolicy, QuestStatus, UserId,
    };

    fn lifecycle(store: &InMemoryStore) -> QuestLifecycle {
        QuestLifecycle::new(
            Arc::new(store.clone()),
            clock(),
            ProgressionSettings::default(),
        )
    }

    async fn accepted(store: &InMemoryStore, quest: &Quest) {
        lifecycle(store)
            .execute(quest.character_id, quest.id, QuestAction::Accept)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn accept_moves_quest_in_progress() {
        let Seed { store, quest, .. } = seed(vec![]).await;

        let outcome = lifecycle(&store)
            .execute(quest.character_id, quest.id, QuestAction::Accept)
            .await
            .unwrap();

        assert_eq!(outcome.transition, QuestTransition::Accepted);
        assert_eq!(outcome.notifications(), vec!["Quest accepted."]);
        let stored = store.get_quest(quest.id).await.unwrap().unwrap();
        assert_eq!(stored.status, QuestStatus::InProgress);
        assert_eq!(stored.progress, 0);
        assert_eq!(stored.version, 1);
    }

    #[tokio::test]
    async fn accepting_twice_fails_and_keeps_progress() {
        let Seed { store, quest, .. } = seed(vec![]).await;
        accepted(&store, &quest).await;
        lifecycle(&store)
            .execute(quest.character_id, quest.id, QuestAction::RecordProgress)
            .await
            .unwrap();

        let result = lifecycle(&store)
            .execute(quest.character_id, quest.id, QuestAction::Accept)
            .await;

        assert!(matches!(result, Err(ProgressionError::InvalidTransition(_))));
        let stored = store.get_quest(quest.id).await.unwrap().unwrap();
        assert_eq!(stored.progress, 25);
    }

    #[tokio::test]
    async fn cancel_on_available_quest_is_invalid() {
        let Seed { store, quest, .. } = seed(vec![]).await;

        let result = lifecycle(&store)
            .execute(quest.character_id, quest.id, QuestAction::Cancel)
            .await;

        assert!(matches!(result, Err(ProgressionError::InvalidTransition(_))));
    }

    #[tokio::test]
    async fn unknown_quest_is_not_found() {
        let store = InMemoryStore::new();
        let result = lifecycle(&store)
            .execute(CharacterId::new(), QuestId::new(), QuestAction::Accept)
            .await;
        assert!(matches!(result, Err(ProgressionError::NotFound { entity_type: "Quest", .. })));
    }

    #[tokio::test]
    async fn foreign_quest_is_not_found_and_untouched() {
        let Seed { store, quest, .. } = seed(vec![pending_item("Potion", 2)]).await;
        let stranger = character_for(UserId::new());

        let result = lifecycle(&store)
            .execute(stranger.id, quest.id, QuestAction::Accept)
            .await;

        assert!(matches!(result, Err(ProgressionError::NotFound { entity_type: "Quest", .. })));
        let stored = store.get_quest(quest.id).await.unwrap().unwrap();
        assert_eq!(stored.status, QuestStatus::Available);
        assert_eq!(stored.version, quest.version);
    }

    #[tokio::test]
    async fn foreign_in_progress_quest_cannot_be_cancelled() {
        let Seed {
            store,
            character,
            quest,
        } = seed(vec![pending_item("Potion", 2)]).await;
        accepted(&store, &quest).await;
        let stranger = character_for(UserId::new());

        let result = lifecycle(&store)
            .execute(stranger.id, quest.id, QuestAction::Cancel)
            .await;

        assert!(matches!(result, Err(ProgressionError::NotFound { .. })));
        let stored = store.get_quest(quest.id).await.unwrap().unwrap();
        assert_eq!(stored.status, QuestStatus::InProgress);
        let pending = store.list_items(character.id, ItemStatus::Pending).await.unwrap();
        assert_eq!(pending[0].quantity.get(), 2);
    }

    #[tokio::test]
    async fn fourth_progress_completes_and_rewards() {
        let Seed {
            store,
            character,
            quest,
        } = seed(vec![completed_item("Potion", 3), pending_item("Potion", 2)]).await;
        accepted(&store, &quest).await;
        let engine = lifecycle(&store);

        for expected in [25, 50, 75] {
            let outcome = engine
                .execute(quest.character_id, quest.id, QuestAction::RecordProgress)
                .await
                .unwrap();
            assert_eq!(outcome.transition, QuestTransition::Progressed { progress: expected });
            assert!(outcome.rewards.is_none());
            assert_eq!(outcome.notifications(), vec!["Progress updated."]);
            assert_eq!(
                store.get_character(character.id).await.unwrap().unwrap().experience,
                0
            );
        }

        let outcome = engine
            .execute(quest.character_id, quest.id, QuestAction::RecordProgress)
            .await
            .unwrap();

        assert!(outcome.completed());
        assert_eq!(outcome.quest.status, QuestStatus::Completed);
        assert_eq!(outcome.quest.progress, 100);
        assert!(outcome.quest.completed_at.is_some());

        let stored = store.get_character(character.id).await.unwrap().unwrap();
        assert_eq!(stored.experience, Difficulty::C.experience_reward());

        let inventory = store
            .list_items(character.id, ItemStatus::Completed)
            .await
            .unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory[0].quantity.get(), 5);
    }

    #[tokio::test]
    async fn progress_on_completed_quest_never_regrants_experience() {
        let Seed {
            store,
            character,
            quest,
        } = seed(vec![]).await;
        accepted(&store, &quest).await;
        for _ in 0..4 {
            lifecycle(&store)
                .execute(quest.character_id, quest.id, QuestAction::RecordProgress)
                .await
                .unwrap();
        }
        let after_completion = store.get_character(character.id).await.unwrap().unwrap();

        let result = lifecycle(&store)
            .execute(quest.character_id, quest.id, QuestAction::RecordProgress)
            .await;

        assert!(matches!(result, Err(ProgressionError::InvalidTransition(_))));
        let now = store.get_character(character.id).await.unwrap().unwrap();
        assert_eq!(now.experience, after_completion.experience);
    }

    #[tokio::test]
    async fn completion_with_level_up_yields_two_notifications() {
        let Seed {
            store,
            character,
            quest,
        } = seed(vec![pending_item("Potion", 2)]).await;
        {
            let mut uow = store.begin().await.unwrap();
            let mut c = uow.get_character(character.id).await.unwrap().unwrap();
            c.experience = 1_900;
            uow.update_character(&c).await.unwrap();
            uow.commit().await.unwrap();
        }
        accepted(&store, &quest).await;
        let engine = lifecycle(&store);
        for _ in 0..3 {
            engine
                .execute(quest.character_id, quest.id, QuestAction::RecordProgress)
                .await
                .unwrap();
        }

        let outcome = engine
            .execute(quest.character_id, quest.id, QuestAction::RecordProgress)
            .await
            .unwrap();

        assert!(outcome.leveled_up());
        assert_eq!(
            outcome.notifications(),
            vec![
                "Quest completed. You got 300 XP + x2 Potion".to_string(),
                "Level Up! Aria has reached level 2 and gained 5 attribute points!".to_string(),
            ]
        );
        let stored = store.get_character(character.id).await.unwrap().unwrap();
        assert_eq!(stored.level, 2);
        assert_eq!(stored.attributes.available_points, 5);
        assert_eq!(stored.max_exp_needed, 5000);
    }

    #[tokio::test]
    async fn cancel_fails_quest_and_retires_rewards() {
        let Seed {
            store,
            character,
            quest,
        } = seed(vec![pending_item("Potion", 2)]).await;
        accepted(&store, &quest).await;

        let outcome = lifecycle(&store)
            .execute(quest.character_id, quest.id, QuestAction::Cancel)
            .await
            .unwrap();

        assert_eq!(outcome.notifications(), vec!["Quest has been cancelled."]);
        assert_eq!(outcome.quest.status, QuestStatus::Failed);
        assert_eq!(outcome.quest.reason.as_deref(), Some("Cancelled by player"));
        assert!(outcome.quest.failed_at.is_some());

        let failed = store.list_items(character.id, ItemStatus::Failed).await.unwrap();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].quantity.get(), 4);
        assert_eq!(
            store.get_character(character.id).await.unwrap().unwrap().experience,
            0
        );
    }

    #[tokio::test]
    async fn release_policy_cancels_without_doubling() {
        let Seed {
            store,
            character,
            quest,
        } = seed(vec![pending_item("Potion", 2)]).await;
        accepted(&store, &quest).await;
        let settings = ProgressionSettings {
            level_up: LevelUpPolicy::Single,
            cancelled_rewards: CancelledRewardPolicy::Release,
        };

        QuestLifecycle::new(Arc::new(store.clone()), clock(), settings)
            .execute(quest.character_id, quest.id, QuestAction::Cancel)
            .await
            .unwrap();

        let failed = store.list_items(character.id, ItemStatus::Failed).await.unwrap();
        assert_eq!(failed[0].quantity.get(), 2);
    }

    fn in_progress_quest_at(progress: u8) -> (Character, Quest, Item) {
        let character = character_for(UserId::new());
        let mut quest = quest_for(&character);
        quest.status = QuestStatus::InProgress;
        quest.progress = progress;
        let mut reward = pending_item("Potion", 2);
        reward.character_id = character.id;
        reward.reward_from_quest_id = Some(quest.id);
        (character, quest, reward)
    }

    #[tokio::test]
    async fn completion_reconciles_items_before_experience() {
        let (character, quest, reward) = in_progress_quest_at(75);
        let quest_id = quest.id;
        let owner = quest.character_id;
        let mut seq = Sequence::new();
        let mut uow = MockUnitOfWork::new();

        uow.expect_get_quest()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(quest.clone())));
        uow.expect_update_quest()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|q| Ok(q.version + 1));
        uow.expect_list_items_by_quest()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(vec![reward.clone()]));
        uow.expect_find_item_by_name_and_status()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(None));
        uow.expect_update_item()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|item| item.status == ItemStatus::Completed)
            .returning(|_| Ok(()));
        uow.expect_get_character()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(character.clone())));
        uow.expect_update_character()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|c| Ok(c.version + 1));
        uow.expect_commit()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let mut store = MockProgressionStore::new();
        store
            .expect_begin()
            .return_once(move || Ok(Box::new(uow) as Box<dyn UnitOfWork>));

        let outcome = QuestLifecycle::new(Arc::new(store), clock(), ProgressionSettings::default())
            .execute(owner, quest_id, QuestAction::RecordProgress)
            .await
            .unwrap();

        assert!(outcome.completed());
    }

    #[tokio::test]
    async fn failed_reconciliation_never_commits() {
        let (_, quest, reward) = in_progress_quest_at(75);
        let quest_id = quest.id;
        let owner = quest.character_id;
        let mut uow = MockUnitOfWork::new();

        uow.expect_get_quest()
            .returning(move |_| Ok(Some(quest.clone())));
        uow.expect_update_quest().returning(|q| Ok(q.version + 1));
        uow.expect_list_items_by_quest()
            .returning(move |_| Ok(vec![reward.clone()]));
        uow.expect_find_item_by_name_and_status()
            .returning(|_, _, _| Ok(None));
        uow.expect_update_item()
            .returning(|_| Err(RepoError::database("update_item", "connection reset")));
        uow.expect_get_character().never();
        uow.expect_update_character().never();
        uow.expect_commit().never();

        let mut store = MockProgressionStore::new();
        store
            .expect_begin()
            .return_once(move || Ok(Box::new(uow) as Box<dyn UnitOfWork>));

        let result = QuestLifecycle::new(Arc::new(store), clock(), ProgressionSettings::default())
            .execute(owner, quest_id, QuestAction::RecordProgress)
            .await;

        assert!(matches!(result, Err(ProgressionError::Repo(RepoError::Database { .. }))));
    }

    #[tokio::test]
    async fn stale_quest_snapshot_surfaces_conflict() {
        let (_, quest, _) = in_progress_quest_at(25);
        let quest_id = quest.id;
        let owner = quest.character_id;
        let mut uow = MockUnitOfWork::new();
        uow.expect_get_quest()
            .returning(move |_| Ok(Some(quest.clone())));
        uow.expect_update_quest()
            .returning(|q| Err(RepoError::conflict("Quest", q.id, q.version)));
        uow.expect_commit().never();

        let mut store = MockProgressionStore::new();
        store
            .expect_begin()
            .return_once(move || Ok(Box::new(uow) as Box<dyn UnitOfWork>));

        let result = QuestLifecycle::new(Arc::new(store), clock(), ProgressionSettings::default())
            .execute(owner, quest_id, QuestAction::RecordProgress)
            .await;

        assert!(matches!(result, Err(ProgressionError::Repo(RepoError::Conflict { .. }))));
    }
}
