//! Character use cases: creation, attribute reallocation and read models.

use std::sync::Arc;

mod allocate;
mod create;
mod dashboard;
mod inventory;
mod leaderboard;

pub use allocate::ReallocateAttributes;
pub use create::{CharacterCreation, CreateCharacterInput};
pub use dashboard::{Dashboard, DashboardView, QuestCounts};
pub use inventory::Inventory;
pub use leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardView, DEFAULT_LEADERBOARD_SIZE};

/// Container for character use cases.
pub struct CharacterUseCases {
    pub create: Arc<CharacterCreation>,
    pub reallocate: Arc<ReallocateAttributes>,
    pub dashboard: Arc<Dashboard>,
    pub inventory: Arc<Inventory>,
    pub leaderboard: Arc<Leaderboard>,
}

impl CharacterUseCases {
    pub fn new(
        create: Arc<CharacterCreation>,
        reallocate: Arc<ReallocateAttributes>,
        dashboard: Arc<Dashboard>,
        inventory: Arc<Inventory>,
        leaderboard: Arc<Leaderboard>,
    ) -> Self {
        Self {
            create,
            reallocate,
            dashboard,
            inventory,
            leaderboard,
        }
    }
}
