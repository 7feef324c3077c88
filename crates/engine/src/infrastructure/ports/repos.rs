//! Persistence ports.
//!
//! Reads that feed views go straight through [`ProgressionStore`]. Anything
//! that writes opens a [`UnitOfWork`] with [`ProgressionStore::begin`],
//! does all of its reads and writes through it and finishes with
//! [`UnitOfWork::commit`]. A unit of work dropped before commit is rolled
//! back, so an early `?` return never leaves half a transition behind.
//!
//! # Versions
//!
//! `update_character` and `update_quest` only succeed when the stored row
//! still carries the version of the snapshot passed in. They return the new
//! version; a mismatch is [`RepoError::Conflict`].

use async_trait::async_trait;
use questbound_domain::{
    Character, CharacterId, Item, ItemId, ItemName, ItemStatus, Quest, QuestId, QuestStatus,
    Skill, SkillId, UserId,
};

use super::error::RepoError;
use super::types::RankedCharacter;

// =============================================================================
// Store (reads + transaction factory)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressionStore: Send + Sync {
    /// Open a unit of work. Writers are serialized per store.
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepoError>;

    async fn get_character(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    async fn get_character_by_user(&self, user_id: UserId)
        -> Result<Option<Character>, RepoError>;

    /// Characters ordered by level, then experience, both descending.
    async fn ranked_characters(&self, limit: u32) -> Result<Vec<RankedCharacter>, RepoError>;

    async fn get_quest(&self, id: QuestId) -> Result<Option<Quest>, RepoError>;
    async fn list_quests(&self, character_id: CharacterId) -> Result<Vec<Quest>, RepoError>;
    async fn count_quests(
        &self,
        character_id: CharacterId,
        status: QuestStatus,
    ) -> Result<u64, RepoError>;

    /// Items of one character in one status, in insertion order.
    async fn list_items(
        &self,
        character_id: CharacterId,
        status: ItemStatus,
    ) -> Result<Vec<Item>, RepoError>;

    /// Skills of one character, in insertion order.
    async fn list_skills(&self, character_id: CharacterId) -> Result<Vec<Skill>, RepoError>;
}

// =============================================================================
// Unit of work (transactional gateway)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitOfWork: Send {
    // Characters
    async fn get_character(&mut self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    async fn insert_character(&mut self, character: &Character) -> Result<(), RepoError>;
    async fn update_character(&mut self, character: &Character) -> Result<u64, RepoError>;

    // Quests
    async fn get_quest(&mut self, id: QuestId) -> Result<Option<Quest>, RepoError>;
    async fn insert_quest(&mut self, quest: &Quest) -> Result<(), RepoError>;
    async fn update_quest(&mut self, quest: &Quest) -> Result<u64, RepoError>;

    // Items
    /// Every item whose `reward_from_quest_id` is `quest_id`, any status.
    async fn list_items_by_quest(&mut self, quest_id: QuestId) -> Result<Vec<Item>, RepoError>;
    async fn find_item_by_name_and_status(
        &mut self,
        character_id: CharacterId,
        name: &ItemName,
        status: ItemStatus,
    ) -> Result<Option<Item>, RepoError>;
    async fn insert_item(&mut self, item: &Item) -> Result<(), RepoError>;
    async fn update_item(&mut self, item: &Item) -> Result<(), RepoError>;
    async fn delete_item(&mut self, id: ItemId) -> Result<(), RepoError>;

    // Skills
    async fn get_skill(&mut self, id: SkillId) -> Result<Option<Skill>, RepoError>;
    async fn insert_skill(&mut self, skill: &Skill) -> Result<(), RepoError>;
    async fn update_skill(&mut self, skill: &Skill) -> Result<(), RepoError>;
    async fn delete_skill(&mut self, id: SkillId) -> Result<(), RepoError>;

    /// Make every write of this unit visible. Calls after commit fail.
    async fn commit(&mut self) -> Result<(), RepoError>;
}
