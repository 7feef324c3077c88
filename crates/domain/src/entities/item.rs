//! Item entity - inventory rows and escrowed quest rewards
//!
//! Item rows play three roles depending on `status`:
//! - PENDING: reward receipt created with a quest, never shown in inventory
//! - COMPLETED: a visible inventory stack
//! - FAILED: inert history of a cancelled quest

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{ItemName, Quantity};
use crate::{CharacterId, ItemId, QuestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Pending,
    Completed,
    Failed,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

impl FromStr for ItemStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            other => Err(DomainError::parse(format!("unknown item status '{other}'"))),
        }
    }
}

/// An inventory row.
///
/// Plain data: the stacking invariant (one COMPLETED row per name and
/// character) is kept by reward reconciliation, not by this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub character_id: CharacterId,
    pub name: ItemName,
    pub description: Option<String>,
    pub quantity: Quantity,
    pub status: ItemStatus,
    pub reward_from_quest_id: Option<QuestId>,
}

impl Item {
    /// Escrowed reward created alongside a quest.
    ///
    /// A blank description is stored as `None`.
    pub fn pending_reward(
        character_id: CharacterId,
        quest_id: QuestId,
        name: ItemName,
        description: Option<String>,
        quantity: Quantity,
    ) -> Self {
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Self {
            id: ItemId::new(),
            character_id,
            name,
            description,
            quantity,
            status: ItemStatus::Pending,
            reward_from_quest_id: Some(quest_id),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.status == ItemStatus::Completed
    }
}
