//! Character dashboard read model.

use std::sync::Arc;

use serde::Serialize;

use questbound_domain::{Character, Item, ItemStatus, QuestStatus, Skill, UserId};

use crate::infrastructure::ports::ProgressionStore;
use crate::use_cases::error::ProgressionError;

const DASHBOARD_SKILLS: usize = 4;
const DASHBOARD_ITEMS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestCounts {
    pub completed: u64,
    pub in_progress: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub character: Character,
    /// Fill of the experience bar, 100 once the cap is lifted.
    pub experience_percentage: u8,
    pub skills: Vec<Skill>,
    pub items: Vec<Item>,
    pub quests: QuestCounts,
}

pub struct Dashboard {
    store: Arc<dyn ProgressionStore>,
}

impl Dashboard {
    pub fn new(store: Arc<dyn ProgressionStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self, user_id: UserId) -> Result<DashboardView, ProgressionError> {
        let character = self
            .store
            .get_character_by_user(user_id)
            .await?
            .ok_or_else(|| ProgressionError::not_found("Character", user_id))?;

        let mut skills = self.store.list_skills(character.id).await?;
        skills.truncate(DASHBOARD_SKILLS);
        let mut items = self
            .store
            .list_items(character.id, ItemStatus::Completed)
            .await?;
        items.truncate(DASHBOARD_ITEMS);

        let quests = QuestCounts {
            completed: self.store.count_quests(character.id, QuestStatus::Completed).await?,
            in_progress: self.store.count_quests(character.id, QuestStatus::InProgress).await?,
            failed: self.store.count_quests(character.id, QuestStatus::Failed).await?,
        };

        Ok(DashboardView {
            experience_percentage: character.experience_percentage(),
            character,
            skills,
            items,
            quests,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockProgressionStore;
    use crate::test_fixtures::{character_for, completed_item, skill_for};

    #[tokio::test]
    async fn caps_lists_and_counts_quests() {
        let user_id = UserId::new();
        let mut character = character_for(user_id);
        character.experience = 500;
        let skills: Vec<Skill> = (0..6).map(|_| skill_for(&character, 10)).collect();
        let items: Vec<Item> = ["Potion", "Rope", "Torch", "Lantern"]
            .into_iter()
            .map(|name| completed_item(name, 1))
            .collect();

        let mut store = MockProgressionStore::new();
        let found = character.clone();
        store
            .expect_get_character_by_user()
            .return_once(move |_| Ok(Some(found)));
        store.expect_list_skills().return_once(move |_| Ok(skills));
        store
            .expect_list_items()
            .withf(|_, status| *status == ItemStatus::Completed)
            .return_once(move |_, _| Ok(items));
        store
            .expect_count_quests()
            .returning(|_, status| match status {
                QuestStatus::Completed => Ok(4),
                QuestStatus::InProgress => Ok(1),
                QuestStatus::Failed => Ok(2),
                QuestStatus::Available => Ok(9),
            });

        let view = Dashboard::new(Arc::new(store)).load(user_id).await.unwrap();

        assert_eq!(view.skills.len(), 4);
        assert_eq!(view.items.len(), 3);
        assert_eq!(view.items[2].name.as_str(), "Torch");
        assert_eq!(
            view.quests,
            QuestCounts {
                completed: 4,
                in_progress: 1,
                failed: 2
            }
        );
        assert_eq!(view.experience_percentage, 25);
    }

    #[tokio::test]
    async fn user_without_character_is_not_found() {
        let mut store = MockProgressionStore::new();
        store
            .expect_get_character_by_user()
            .return_once(|_| Ok(None));

        let result = Dashboard::new(Arc::new(store)).load(UserId::new()).await;

        assert!(matches!(result, Err(ProgressionError::NotFound { entity_type: "Character", .. })));
    }
}
