//! Quest entity and its lifecycle
//!
//! ```text
//! AVAILABLE --accept--> IN_PROGRESS --progress x4--> COMPLETED
//!                            |
//!                            +--cancel--> FAILED
//! ```
//!
//! COMPLETED and FAILED are terminal. Nothing ever goes back to AVAILABLE.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{ItemName, Quantity, QuestTitle};
use crate::{CharacterId, QuestId};

/// Progress added by one `RecordProgress` action.
pub const PROGRESS_STEP: u8 = 25;

/// Progress value at which a quest completes.
pub const PROGRESS_COMPLETE: u8 = 100;

pub const CANCELLED_BY_PLAYER_REASON: &str = "Cancelled by player";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestStatus {
    Available,
    InProgress,
    Completed,
    Failed,
}

impl QuestStatus {
    pub const ALL: [QuestStatus; 4] = [
        QuestStatus::Available,
        QuestStatus::InProgress,
        QuestStatus::Completed,
        QuestStatus::Failed,
    ];
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "AVAILABLE"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

impl FromStr for QuestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(Self::Available),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "FAILED" => Ok(Self::Failed),
            other => Err(DomainError::parse(format!("unknown quest status '{other}'"))),
        }
    }
}

/// Difficulty rank, E (easiest) through A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    E,
    D,
    C,
    B,
    A,
}

impl Difficulty {
    /// Experience granted when a quest of this rank completes.
    pub fn experience_reward(self) -> u64 {
        match self {
            Self::E => 50,
            Self::D => 150,
            Self::C => 300,
            Self::B => 500,
            Self::A => 1000,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Self::E => "E",
            Self::D => "D",
            Self::C => "C",
            Self::B => "B",
            Self::A => "A",
        };
        f.write_str(rank)
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "E" => Ok(Self::E),
            "D" => Ok(Self::D),
            "C" => Ok(Self::C),
            "B" => Ok(Self::B),
            "A" => Ok(Self::A),
            _ => Err(DomainError::validation("Invalid difficulty")),
        }
    }
}

/// Player-initiated quest actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestAction {
    Accept,
    RecordProgress,
    Cancel,
}

impl fmt::Display for QuestAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => write!(f, "accept"),
            Self::RecordProgress => write!(f, "progress"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

/// What a successful [`Quest::apply`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestTransition {
    Accepted,
    Progressed { progress: u8 },
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub character_id: CharacterId,
    pub title: QuestTitle,
    pub description: String,
    pub difficulty: Difficulty,
    pub status: QuestStatus,
    /// 0..=100 in steps of [`PROGRESS_STEP`].
    pub progress: u8,
    /// Display string fixed at creation, e.g. `"300 XP + x2 Potion"`.
    pub reward: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub reason: Option<String>,
    pub version: u64,
    pub created_at: DateTime<Utc>,
}

impl Quest {
    pub fn new(
        character_id: CharacterId,
        title: QuestTitle,
        description: impl Into<String>,
        difficulty: Difficulty,
        reward: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: QuestId::new(),
            character_id,
            title,
            description: description.into(),
            difficulty,
            status: QuestStatus::Available,
            progress: 0,
            reward: reward.into(),
            completed_at: None,
            failed_at: None,
            reason: None,
            version: 0,
            created_at: now,
        }
    }

    /// Display string for a quest's rewards: `"<exp> XP + x<qty> <name>..."`.
    pub fn describe_reward(difficulty: Difficulty, items: &[(ItemName, Quantity)]) -> String {
        let mut reward = format!("{} XP", difficulty.experience_reward());
        for (name, quantity) in items {
            reward.push_str(&format!(" + x{quantity} {name}"));
        }
        reward
    }

    /// Run one lifecycle action against this quest.
    ///
    /// On error the quest is left untouched.
    pub fn apply(
        &mut self,
        action: QuestAction,
        now: DateTime<Utc>,
    ) -> Result<QuestTransition, DomainError> {
        match (action, self.status) {
            (QuestAction::Accept, QuestStatus::Available) => {
                self.status = QuestStatus::InProgress;
                self.progress = 0;
                Ok(QuestTransition::Accepted)
            }
            (QuestAction::RecordProgress, QuestStatus::InProgress) => {
                let next = self
                    .progress
                    .saturating_add(PROGRESS_STEP)
                    .min(PROGRESS_COMPLETE);
                if next >= PROGRESS_COMPLETE {
                    self.status = QuestStatus::Completed;
                    self.progress = PROGRESS_COMPLETE;
                    self.completed_at = Some(now);
                    Ok(QuestTransition::Completed)
                } else {
                    self.progress = next;
                    Ok(QuestTransition::Progressed { progress: next })
                }
            }
            (QuestAction::Cancel, QuestStatus::InProgress) => {
                self.status = QuestStatus::Failed;
                self.failed_at = Some(now);
                self.reason = Some(CANCELLED_BY_PLAYER_REASON.to_string());
                Ok(QuestTransition::Cancelled)
            }
            (action, status) => Err(DomainError::invalid_transition(format!(
                "cannot {action} a quest that is {status}"
            ))),
        }
    }
}
