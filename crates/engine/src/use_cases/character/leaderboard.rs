//! Leaderboard read model.

use std::sync::Arc;

use serde::Serialize;

use questbound_domain::{CharacterClass, CharacterId, CharacterName, UserId};

use crate::infrastructure::ports::{ProgressionStore, RankedCharacter};
use crate::use_cases::error::ProgressionError;

pub const DEFAULT_LEADERBOARD_SIZE: u32 = 99;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based.
    pub rank: u32,
    pub character_id: CharacterId,
    pub user_id: UserId,
    pub name: CharacterName,
    pub class: CharacterClass,
    pub level: u32,
    pub experience: u64,
    pub completed_quests: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardView {
    pub entries: Vec<LeaderboardEntry>,
    /// The requesting user's rank: their position in `entries`, or one past
    /// the board size when they are not on it. `None` without a character.
    pub own_rank: Option<u32>,
}

pub struct Leaderboard {
    store: Arc<dyn ProgressionStore>,
    size: u32,
}

impl Leaderboard {
    pub fn new(store: Arc<dyn ProgressionStore>, size: u32) -> Self {
        Self { store, size }
    }

    /// Top characters by level, then experience.
    pub async fn top(&self) -> Result<Vec<LeaderboardEntry>, ProgressionError> {
        let ranked = self.store.ranked_characters(self.size).await?;
        Ok(ranked
            .into_iter()
            .zip(1u32..)
            .map(|(row, rank)| entry(rank, row))
            .collect())
    }

    pub async fn load(&self, user_id: UserId) -> Result<LeaderboardView, ProgressionError> {
        let entries = self.top().await?;
        let own_rank = match entries.iter().find(|e| e.user_id == user_id) {
            Some(e) => Some(e.rank),
            None => self
                .store
                .get_character_by_user(user_id)
                .await?
                .map(|_| self.size.saturating_add(1)),
        };
        Ok(LeaderboardView { entries, own_rank })
    }
}

fn entry(rank: u32, row: RankedCharacter) -> LeaderboardEntry {
    let RankedCharacter {
        character,
        completed_quests,
    } = row;
    LeaderboardEntry {
        rank,
        character_id: character.id,
        user_id: character.user_id,
        name: character.name,
        class: character.class,
        level: character.level,
        experience: character.experience,
        completed_quests,
    }
}
