//! Shared builders for engine tests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use questbound_domain::{
    AttributePoints, Character, CharacterClass, CharacterId, CharacterName, Difficulty, Item,
    ItemName, ItemStatus, Quantity, Quest, QuestId, QuestTitle, Skill, SkillName, UserId,
};

use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::memory::InMemoryStore;
use crate::infrastructure::ports::{ClockPort, ProgressionStore};

pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn clock() -> Arc<dyn ClockPort> {
    Arc::new(FixedClock::at(fixed_now()))
}

/// Level 1 warrior named "Aria" with a 10/5/5 split.
pub fn character_for(user_id: UserId) -> Character {
    Character::new(
        user_id,
        CharacterName::new("Aria").unwrap(),
        CharacterClass::Warrior,
        AttributePoints::initial(10, 5, 5).unwrap(),
        fixed_now(),
    )
}

/// AVAILABLE rank C quest whose reward line advertises two potions.
pub fn quest_for(character: &Character) -> Quest {
    Quest::new(
        character.id,
        QuestTitle::new("Clear the cellar").unwrap(),
        "Rats have taken over the tavern cellar",
        Difficulty::C,
        "300 XP + x2 Potion",
        fixed_now(),
    )
}

pub fn skill_for(character: &Character, max_level: u32) -> Skill {
    Skill::new(
        character.id,
        SkillName::new("Fireball").unwrap(),
        "Hurls a ball of flame",
        max_level,
        fixed_now(),
    )
    .unwrap()
}

/// Escrowed reward with placeholder owner and quest ids.
pub fn pending_item(name: &str, quantity: u32) -> Item {
    Item::pending_reward(
        CharacterId::new(),
        QuestId::new(),
        ItemName::new(name).unwrap(),
        None,
        Quantity::new(quantity).unwrap(),
    )
}

/// Inventory stack with a placeholder owner.
pub fn completed_item(name: &str, quantity: u32) -> Item {
    let mut item = pending_item(name, quantity);
    item.status = ItemStatus::Completed;
    item.reward_from_quest_id = None;
    item
}

pub struct Seed {
    pub store: InMemoryStore,
    pub character: Character,
    pub quest: Quest,
}

/// Store holding one character, one AVAILABLE quest and `items`.
///
/// Every item is re-owned by the character; pending ones are tied to the quest.
pub async fn seed(items: Vec<Item>) -> Seed {
    let store = InMemoryStore::new();
    let character = character_for(UserId::new());
    let quest = quest_for(&character);

    let mut uow = store.begin().await.unwrap();
    uow.insert_character(&character).await.unwrap();
    uow.insert_quest(&quest).await.unwrap();
    for mut item in items {
        item.character_id = character.id;
        if item.status == ItemStatus::Pending {
            item.reward_from_quest_id = Some(quest.id);
        }
        uow.insert_item(&item).await.unwrap();
    }
    uow.commit().await.unwrap();

    Seed {
        store,
        character,
        quest,
    }
}
