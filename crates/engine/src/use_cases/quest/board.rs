//! Quest board read model.

use std::sync::Arc;

use serde::Serialize;

use questbound_domain::{CharacterId, Quest, QuestStatus};

use crate::infrastructure::ports::ProgressionStore;
use crate::use_cases::error::ProgressionError;

/// A character's quests split by status, each list in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestBoardView {
    pub available: Vec<Quest>,
    pub in_progress: Vec<Quest>,
    pub completed: Vec<Quest>,
    pub failed: Vec<Quest>,
}

pub struct QuestBoard {
    store: Arc<dyn ProgressionStore>,
}

impl QuestBoard {
    pub fn new(store: Arc<dyn ProgressionStore>) -> Self {
        Self { store }
    }

    pub async fn grouped(&self, character_id: CharacterId) -> Result<QuestBoardView, ProgressionError> {
        let mut view = QuestBoardView::default();
        for quest in self.store.list_quests(character_id).await? {
            let bucket = match quest.status {
                QuestStatus::Available => &mut view.available,
                QuestStatus::InProgress => &mut view.in_progress,
                QuestStatus::Completed => &mut view.completed,
                QuestStatus::Failed => &mut view.failed,
            };
            bucket.push(quest);
        }
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockProgressionStore;
    use crate::test_fixtures::{character_for, quest_for};
    use questbound_domain::UserId;

    #[tokio::test]
    async fn groups_quests_by_status() {
        let character = character_for(UserId::new());
        let quests: Vec<Quest> = [
            QuestStatus::Available,
            QuestStatus::Completed,
            QuestStatus::InProgress,
            QuestStatus::Available,
        ]
        .into_iter()
        .map(|status| {
            let mut q = quest_for(&character);
            q.status = status;
            q
        })
        .collect();
        let first_available = quests[0].id;

        let mut store = MockProgressionStore::new();
        let character_id = character.id;
        store
            .expect_list_quests()
            .withf(move |id| *id == character_id)
            .return_once(move |_| Ok(quests));

        let view = QuestBoard::new(Arc::new(store))
            .grouped(character.id)
            .await
            .unwrap();

        assert_eq!(view.available.len(), 2);
        assert_eq!(view.available[0].id, first_available);
        assert_eq!(view.in_progress.len(), 1);
        assert_eq!(view.completed.len(), 1);
        assert!(view.failed.is_empty());
    }
}
