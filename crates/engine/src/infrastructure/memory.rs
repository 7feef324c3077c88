//! In-memory progression store for development and testing
//!
//! A unit of work holds the store mutex from `begin` until it is committed
//! or dropped, so writers are fully serialized. Writes go to a private copy
//! of the state that replaces the shared one on commit; dropping the unit
//! discards the copy.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use questbound_domain::{
    Character, CharacterId, Item, ItemId, ItemName, ItemStatus, Quest, QuestId, QuestStatus,
    Skill, SkillId, UserId,
};

use crate::infrastructure::ports::{ProgressionStore, RankedCharacter, RepoError, UnitOfWork};

#[derive(Debug, Clone, Default)]
struct State {
    // Vecs keep insertion order, which the dashboard relies on.
    characters: Vec<Character>,
    quests: Vec<Quest>,
    items: Vec<Item>,
    skills: Vec<Skill>,
}

impl State {
    fn completed_quests(&self, character_id: CharacterId) -> u64 {
        self.quests
            .iter()
            .filter(|q| q.character_id == character_id && q.status == QuestStatus::Completed)
            .count() as u64
    }
}

/// Progression store that lives and dies with the process.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressionStore for InMemoryStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepoError> {
        let guard = self.state.clone().lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(InMemoryUnitOfWork {
            guard,
            working,
            committed: false,
        }))
    }

    async fn get_character(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        let state = self.state.lock().await;
        Ok(state.characters.iter().find(|c| c.id == id).cloned())
    }

    async fn get_character_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Character>, RepoError> {
        let state = self.state.lock().await;
        Ok(state
            .characters
            .iter()
            .find(|c| c.user_id == user_id)
            .cloned())
    }

    async fn ranked_characters(&self, limit: u32) -> Result<Vec<RankedCharacter>, RepoError> {
        let state = self.state.lock().await;
        let mut ranked: Vec<&Character> = state.characters.iter().collect();
        ranked.sort_by(|a, b| {
            b.level
                .cmp(&a.level)
                .then_with(|| b.experience.cmp(&a.experience))
        });
        Ok(ranked
            .into_iter()
            .take(limit as usize)
            .map(|c| RankedCharacter {
                character: c.clone(),
                completed_quests: state.completed_quests(c.id),
            })
            .collect())
    }

    async fn get_quest(&self, id: QuestId) -> Result<Option<Quest>, RepoError> {
        let state = self.state.lock().await;
        Ok(state.quests.iter().find(|q| q.id == id).cloned())
    }

    async fn list_quests(&self, character_id: CharacterId) -> Result<Vec<Quest>, RepoError> {
        let state = self.state.lock().await;
        Ok(state
            .quests
            .iter()
            .filter(|q| q.character_id == character_id)
            .cloned()
            .collect())
    }

    async fn count_quests(
        &self,
        character_id: CharacterId,
        status: QuestStatus,
    ) -> Result<u64, RepoError> {
        let state = self.state.lock().await;
        Ok(state
            .quests
            .iter()
            .filter(|q| q.character_id == character_id && q.status == status)
            .count() as u64)
    }

    async fn list_items(
        &self,
        character_id: CharacterId,
        status: ItemStatus,
    ) -> Result<Vec<Item>, RepoError> {
        let state = self.state.lock().await;
        Ok(state
            .items
            .iter()
            .filter(|i| i.character_id == character_id && i.status == status)
            .cloned()
            .collect())
    }

    async fn list_skills(&self, character_id: CharacterId) -> Result<Vec<Skill>, RepoError> {
        let state = self.state.lock().await;
        Ok(state
            .skills
            .iter()
            .filter(|s| s.character_id == character_id)
            .cloned()
            .collect())
    }
}

struct InMemoryUnitOfWork {
    guard: OwnedMutexGuard<State>,
    working: State,
    committed: bool,
}

impl InMemoryUnitOfWork {
    fn state(&mut self) -> Result<&mut State, RepoError> {
        if self.committed {
            return Err(RepoError::database(
                "unit_of_work",
                "unit of work already committed",
            ));
        }
        Ok(&mut self.working)
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn get_character(&mut self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        let state = self.state()?;
        Ok(state.characters.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_character(&mut self, character: &Character) -> Result<(), RepoError> {
        let state = self.state()?;
        if state.characters.iter().any(|c| c.user_id == character.user_id) {
            return Err(RepoError::constraint(format!(
                "user {} already has a character",
                character.user_id
            )));
        }
        state.characters.push(character.clone());
        Ok(())
    }

    async fn update_character(&mut self, character: &Character) -> Result<u64, RepoError> {
        let state = self.state()?;
        let stored = state
            .characters
            .iter_mut()
            .find(|c| c.id == character.id)
            .ok_or_else(|| RepoError::not_found("Character", character.id))?;
        if stored.version != character.version {
            return Err(RepoError::conflict(
                "Character",
                character.id,
                character.version,
            ));
        }
        let version = character.version + 1;
        *stored = Character {
            version,
            ..character.clone()
        };
        Ok(version)
    }

    async fn get_quest(&mut self, id: QuestId) -> Result<Option<Quest>, RepoError> {
        let state = self.state()?;
        Ok(state.quests.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_quest(&mut self, quest: &Quest) -> Result<(), RepoError> {
        let state = self.state()?;
        state.quests.push(quest.clone());
        Ok(())
    }

    async fn update_quest(&mut self, quest: &Quest) -> Result<u64, RepoError> {
        let state = self.state()?;
        let stored = state
            .quests
            .iter_mut()
            .find(|q| q.id == quest.id)
            .ok_or_else(|| RepoError::not_found("Quest", quest.id))?;
        if stored.version != quest.version {
            return Err(RepoError::conflict("Quest", quest.id, quest.version));
        }
        let version = quest.version + 1;
        *stored = Quest {
            version,
            ..quest.clone()
        };
        Ok(version)
    }

    async fn list_items_by_quest(&mut self, quest_id: QuestId) -> Result<Vec<Item>, RepoError> {
        let state = self.state()?;
        Ok(state
            .items
            .iter()
            .filter(|i| i.reward_from_quest_id == Some(quest_id))
            .cloned()
            .collect())
    }

    async fn find_item_by_name_and_status(
        &mut self,
        character_id: CharacterId,
        name: &ItemName,
        status: ItemStatus,
    ) -> Result<Option<Item>, RepoError> {
        let state = self.state()?;
        Ok(state
            .items
            .iter()
            .find(|i| i.character_id == character_id && &i.name == name && i.status == status)
            .cloned())
    }

    async fn insert_item(&mut self, item: &Item) -> Result<(), RepoError> {
        let state = self.state()?;
        state.items.push(item.clone());
        Ok(())
    }

    async fn update_item(&mut self, item: &Item) -> Result<(), RepoError> {
        let state = self.state()?;
        let stored = state
            .items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or_else(|| RepoError::not_found("Item", item.id))?;
        *stored = item.clone();
        Ok(())
    }

    async fn delete_item(&mut self, id: ItemId) -> Result<(), RepoError> {
        let state = self.state()?;
        let before = state.items.len();
        state.items.retain(|i| i.id != id);
        if state.items.len() == before {
            return Err(RepoError::not_found("Item", id));
        }
        Ok(())
    }

    async fn get_skill(&mut self, id: SkillId) -> Result<Option<Skill>, RepoError> {
        let state = self.state()?;
        Ok(state.skills.iter().find(|s| s.id == id).cloned())
    }

    async fn insert_skill(&mut self, skill: &Skill) -> Result<(), RepoError> {
        let state = self.state()?;
        state.skills.push(skill.clone());
        Ok(())
    }

    async fn update_skill(&mut self, skill: &Skill) -> Result<(), RepoError> {
        let state = self.state()?;
        let stored = state
            .skills
            .iter_mut()
            .find(|s| s.id == skill.id)
            .ok_or_else(|| RepoError::not_found("Skill", skill.id))?;
        *stored = skill.clone();
        Ok(())
    }

    async fn delete_skill(&mut self, id: SkillId) -> Result<(), RepoError> {
        let state = self.state()?;
        let before = state.skills.len();
        state.skills.retain(|s| s.id != id);
        if state.skills.len() == before {
            return Err(RepoError::not_found("Skill", id));
        }
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), RepoError> {
        let working = std::mem::take(self.state()?);
        *self.guard = working;
        self.committed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{character_for, fixed_now, quest_for};

    #[tokio::test]
    async fn committed_writes_are_visible() {
        let store = InMemoryStore::new();
        let character = character_for(UserId::new());

        let mut uow = store.begin().await.unwrap();
        uow.insert_character(&character).await.unwrap();
        uow.commit().await.unwrap();
        drop(uow);

        let loaded = store.get_character(character.id).await.unwrap();
        assert_eq!(loaded, Some(character));
    }

    #[tokio::test]
    async fn dropped_unit_of_work_rolls_back() {
        let store = InMemoryStore::new();
        let character = character_for(UserId::new());

        {
            let mut uow = store.begin().await.unwrap();
            uow.insert_character(&character).await.unwrap();
        }

        assert!(store.get_character(character.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unit_of_work_is_unusable_after_commit() {
        let store = InMemoryStore::new();
        let mut uow = store.begin().await.unwrap();
        uow.commit().await.unwrap();

        let err = uow.get_character(CharacterId::new()).await.unwrap_err();
        assert!(matches!(err, RepoError::Database { .. }));
    }

    #[tokio::test]
    async fn stale_quest_version_is_a_conflict() {
        let store = InMemoryStore::new();
        let character = character_for(UserId::new());
        let quest = quest_for(&character);

        let mut uow = store.begin().await.unwrap();
        uow.insert_character(&character).await.unwrap();
        uow.insert_quest(&quest).await.unwrap();
        let version = uow.update_quest(&quest).await.unwrap();
        assert_eq!(version, 1);

        // same snapshot again: stored row is already at version 1
        let err = uow.update_quest(&quest).await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn second_character_for_user_is_rejected() {
        let store = InMemoryStore::new();
        let user_id = UserId::new();

        let mut uow = store.begin().await.unwrap();
        uow.insert_character(&character_for(user_id)).await.unwrap();
        let err = uow
            .insert_character(&character_for(user_id))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn writers_are_serialized() {
        let store = InMemoryStore::new();
        let first = store.begin().await.unwrap();

        let second = tokio::time::timeout(std::time::Duration::from_millis(50), store.begin()).await;
        assert!(second.is_err(), "second writer should wait for the first");

        drop(first);
        assert!(store.begin().await.is_ok());
    }

    #[tokio::test]
    async fn ranking_orders_by_level_then_experience() {
        let store = InMemoryStore::new();
        let mut low = character_for(UserId::new());
        low.level = 2;
        low.experience = 9000;
        let mut high = character_for(UserId::new());
        high.level = 5;
        high.experience = 10;
        let mut tied = character_for(UserId::new());
        tied.level = 5;
        tied.experience = 20;

        let mut uow = store.begin().await.unwrap();
        for c in [&low, &high, &tied] {
            uow.insert_character(c).await.unwrap();
        }
        let mut done = quest_for(&high);
        done.status = QuestStatus::Completed;
        done.completed_at = Some(fixed_now());
        uow.insert_quest(&done).await.unwrap();
        uow.commit().await.unwrap();
        drop(uow);

        let ranked = store.ranked_characters(2).await.unwrap();
        let ids: Vec<_> = ranked.iter().map(|r| r.character.id).collect();
        assert_eq!(ids, vec![tied.id, high.id]);
        assert_eq!(ranked[1].completed_quests, 1);
    }
}
