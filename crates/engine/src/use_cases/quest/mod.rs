//! Quest use cases.

use std::sync::Arc;

mod board;
mod create;
mod lifecycle;

pub use board::{QuestBoard, QuestBoardView};
pub use create::{CreateQuest, CreateQuestInput, RewardInput};
pub use lifecycle::{CompletionRewards, QuestLifecycle, QuestProgressOutcome};

/// Container for quest use cases.
pub struct QuestUseCases {
    pub lifecycle: Arc<QuestLifecycle>,
    pub create: Arc<CreateQuest>,
    pub board: Arc<QuestBoard>,
}

impl QuestUseCases {
    pub fn new(
        lifecycle: Arc<QuestLifecycle>,
        create: Arc<CreateQuest>,
        board: Arc<QuestBoard>,
    ) -> Self {
        Self {
            lifecycle,
            create,
            board,
        }
    }
}
