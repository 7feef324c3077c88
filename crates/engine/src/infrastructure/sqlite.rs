//! SQLite-backed progression store.
//!
//! One `sqlx` transaction per unit of work. Timestamps go through sqlx's
//! chrono support and ids through its uuid support; enums are stored in
//! their uppercase display form.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

use questbound_domain::{
    AttributePoints, Character, CharacterClass, CharacterId, CharacterName, Difficulty, Item,
    ItemId, ItemName, ItemStatus, Quantity, Quest, QuestId, QuestStatus, QuestTitle, Skill,
    SkillId, SkillName, UserId,
};

use crate::infrastructure::ports::{ProgressionStore, RankedCharacter, RepoError, UnitOfWork};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        id BLOB PRIMARY KEY NOT NULL,
        user_id BLOB NOT NULL UNIQUE,
        name TEXT NOT NULL,
        class TEXT NOT NULL,
        level INTEGER NOT NULL,
        experience INTEGER NOT NULL,
        max_exp_needed INTEGER NOT NULL,
        max_level_reached INTEGER NOT NULL,
        strength INTEGER NOT NULL,
        intelligence INTEGER NOT NULL,
        endurance INTEGER NOT NULL,
        available_points INTEGER NOT NULL,
        version INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS quests (
        id BLOB PRIMARY KEY NOT NULL,
        character_id BLOB NOT NULL REFERENCES characters(id),
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        difficulty TEXT NOT NULL,
        status TEXT NOT NULL,
        progress INTEGER NOT NULL,
        reward TEXT NOT NULL,
        completed_at TEXT,
        failed_at TEXT,
        reason TEXT,
        version INTEGER NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id BLOB PRIMARY KEY NOT NULL,
        character_id BLOB NOT NULL REFERENCES characters(id),
        name TEXT NOT NULL,
        description TEXT,
        quantity INTEGER NOT NULL,
        status TEXT NOT NULL,
        reward_from_quest_id BLOB REFERENCES quests(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skills (
        id BLOB PRIMARY KEY NOT NULL,
        character_id BLOB NOT NULL REFERENCES characters(id),
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        level INTEGER NOT NULL,
        max_level INTEGER NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_quests_character ON quests(character_id, status)",
    "CREATE INDEX IF NOT EXISTS idx_items_character ON items(character_id, status, name)",
    "CREATE INDEX IF NOT EXISTS idx_items_quest ON items(reward_from_quest_id)",
    "CREATE INDEX IF NOT EXISTS idx_skills_character ON skills(character_id)",
];

/// SQLite implementation of the progression store.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `url` and bootstrap the schema.
    pub async fn connect(url: &str) -> Result<Self, RepoError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| RepoError::database("connect", e))?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&pool)
                .await
                .map_err(|e| RepoError::database("schema", e))?;
        }

        tracing::debug!(url, "SQLite progression store ready");
        Ok(Self { pool })
    }
}

// =============================================================================
// Row mapping
// =============================================================================

fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepoError>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepoError::serialization(format!("column {name}: {e}")))
}

fn int<T: TryFrom<i64>>(row: &SqliteRow, name: &str) -> Result<T, RepoError> {
    let raw: i64 = column(row, name)?;
    T::try_from(raw).map_err(|_| RepoError::serialization(format!("column {name}: {raw} out of range")))
}

fn to_db_int<T: TryInto<i64> + Copy + std::fmt::Display>(value: T) -> Result<i64, RepoError> {
    value
        .try_into()
        .map_err(|_| RepoError::serialization(format!("{value} does not fit in an INTEGER column")))
}

fn parsed<T: FromStr>(row: &SqliteRow, name: &str) -> Result<T, RepoError>
where
    T::Err: std::fmt::Display,
{
    let raw: String = column(row, name)?;
    raw.parse()
        .map_err(|e| RepoError::serialization(format!("column {name}: {e}")))
}

fn row_to_character(row: &SqliteRow) -> Result<Character, RepoError> {
    let name: String = column(row, "name")?;
    Ok(Character {
        id: CharacterId::from_uuid(column(row, "id")?),
        user_id: UserId::from_uuid(column(row, "user_id")?),
        name: CharacterName::new(name).map_err(RepoError::serialization)?,
        class: parsed::<CharacterClass>(row, "class")?,
        level: int(row, "level")?,
        experience: int(row, "experience")?,
        max_exp_needed: int(row, "max_exp_needed")?,
        max_level_reached: int(row, "max_level_reached")?,
        attributes: AttributePoints {
            strength: int(row, "strength")?,
            intelligence: int(row, "intelligence")?,
            endurance: int(row, "endurance")?,
            available_points: int(row, "available_points")?,
        },
        version: int(row, "version")?,
        created_at: column(row, "created_at")?,
        updated_at: column(row, "updated_at")?,
    })
}

fn row_to_quest(row: &SqliteRow) -> Result<Quest, RepoError> {
    let title: String = column(row, "title")?;
    Ok(Quest {
        id: QuestId::from_uuid(column(row, "id")?),
        character_id: CharacterId::from_uuid(column(row, "character_id")?),
        title: QuestTitle::new(title).map_err(RepoError::serialization)?,
        description: column(row, "description")?,
        difficulty: parsed::<Difficulty>(row, "difficulty")?,
        status: parsed::<QuestStatus>(row, "status")?,
        progress: int(row, "progress")?,
        reward: column(row, "reward")?,
        completed_at: column(row, "completed_at")?,
        failed_at: column(row, "failed_at")?,
        reason: column(row, "reason")?,
        version: int(row, "version")?,
        created_at: column(row, "created_at")?,
    })
}

fn row_to_item(row: &SqliteRow) -> Result<Item, RepoError> {
    let name: String = column(row, "name")?;
    let quest_id: Option<Uuid> = column(row, "reward_from_quest_id")?;
    Ok(Item {
        id: ItemId::from_uuid(column(row, "id")?),
        character_id: CharacterId::from_uuid(column(row, "character_id")?),
        name: ItemName::new(name).map_err(RepoError::serialization)?,
        description: column(row, "description")?,
        quantity: Quantity::new(int(row, "quantity")?).map_err(RepoError::serialization)?,
        status: parsed::<ItemStatus>(row, "status")?,
        reward_from_quest_id: quest_id.map(QuestId::from_uuid),
    })
}

fn row_to_skill(row: &SqliteRow) -> Result<Skill, RepoError> {
    let name: String = column(row, "name")?;
    Ok(Skill {
        id: SkillId::from_uuid(column(row, "id")?),
        character_id: CharacterId::from_uuid(column(row, "character_id")?),
        name: SkillName::new(name).map_err(RepoError::serialization)?,
        description: column(row, "description")?,
        level: int(row, "level")?,
        max_level: int(row, "max_level")?,
        created_at: column(row, "created_at")?,
    })
}

// =============================================================================
// Store (reads)
// =============================================================================

#[async_trait]
impl ProgressionStore for SqliteStore {
    /// Takes the write lock up front so competing units of work queue on
    /// SQLite's busy timeout and then read the state their predecessor committed.
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, RepoError> {
        let tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| RepoError::database("begin", e))?;
        Ok(Box::new(SqliteUnitOfWork { tx: Some(tx) }))
    }

    async fn get_character(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        let row = sqlx::query("SELECT * FROM characters WHERE id = ?")
            .bind(id.to_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_character", e))?;
        row.as_ref().map(row_to_character).transpose()
    }

    async fn get_character_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Character>, RepoError> {
        let row = sqlx::query("SELECT * FROM characters WHERE user_id = ?")
            .bind(user_id.to_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_character_by_user", e))?;
        row.as_ref().map(row_to_character).transpose()
    }

    async fn ranked_characters(&self, limit: u32) -> Result<Vec<RankedCharacter>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT c.*,
                (SELECT COUNT(*) FROM quests q
                 WHERE q.character_id = c.id AND q.status = 'COMPLETED') AS completed_quests
            FROM characters c
            ORDER BY c.level DESC, c.experience DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("ranked_characters", e))?;

        rows.iter()
            .map(|row| -> Result<RankedCharacter, RepoError> {
                Ok(RankedCharacter {
                    character: row_to_character(row)?,
                    completed_quests: int(row, "completed_quests")?,
                })
            })
            .collect()
    }

    async fn get_quest(&self, id: QuestId) -> Result<Option<Quest>, RepoError> {
        let row = sqlx::query("SELECT * FROM quests WHERE id = ?")
            .bind(id.to_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_quest", e))?;
        row.as_ref().map(row_to_quest).transpose()
    }

    async fn list_quests(&self, character_id: CharacterId) -> Result<Vec<Quest>, RepoError> {
        let rows = sqlx::query("SELECT * FROM quests WHERE character_id = ? ORDER BY rowid")
            .bind(character_id.to_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_quests", e))?;
        rows.iter().map(row_to_quest).collect()
    }

    async fn count_quests(
        &self,
        character_id: CharacterId,
        status: QuestStatus,
    ) -> Result<u64, RepoError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM quests WHERE character_id = ? AND status = ?")
                .bind(character_id.to_uuid())
                .bind(status.to_string())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| RepoError::database("count_quests", e))?;
        u64::try_from(count).map_err(|_| RepoError::serialization("negative quest count"))
    }

    async fn list_items(
        &self,
        character_id: CharacterId,
        status: ItemStatus,
    ) -> Result<Vec<Item>, RepoError> {
        let rows =
            sqlx::query("SELECT * FROM items WHERE character_id = ? AND status = ? ORDER BY rowid")
                .bind(character_id.to_uuid())
                .bind(status.to_string())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepoError::database("list_items", e))?;
        rows.iter().map(row_to_item).collect()
    }

    async fn list_skills(&self, character_id: CharacterId) -> Result<Vec<Skill>, RepoError> {
        let rows = sqlx::query("SELECT * FROM skills WHERE character_id = ? ORDER BY rowid")
            .bind(character_id.to_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_skills", e))?;
        rows.iter().map(row_to_skill).collect()
    }
}

// =============================================================================
// Unit of work (writes)
// =============================================================================

struct SqliteUnitOfWork {
    // `None` once committed; dropping a live transaction rolls it back.
    tx: Option<Transaction<'static, Sqlite>>,
}

impl SqliteUnitOfWork {
    fn conn(&mut self) -> Result<&mut SqliteConnection, RepoError> {
        self.tx
            .as_deref_mut()
            .ok_or_else(|| RepoError::database("unit_of_work", "unit of work already committed"))
    }

    /// Tell a missing row from a version mismatch after a 0-row update.
    async fn refused_update(
        &mut self,
        table: &'static str,
        entity_type: &'static str,
        id: Uuid,
        expected: u64,
    ) -> RepoError {
        let query = format!("SELECT 1 FROM {table} WHERE id = ?");
        let exists = match self.conn() {
            Ok(conn) => sqlx::query(&query).bind(id).fetch_optional(conn).await,
            Err(e) => return e,
        };
        match exists {
            Ok(Some(_)) => RepoError::conflict(entity_type, id, expected),
            Ok(None) => RepoError::not_found(entity_type, id),
            Err(e) => RepoError::database("update", e),
        }
    }
}

#[async_trait]
impl UnitOfWork for SqliteUnitOfWork {
    async fn get_character(&mut self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        let row = sqlx::query("SELECT * FROM characters WHERE id = ?")
            .bind(id.to_uuid())
            .fetch_optional(self.conn()?)
            .await
            .map_err(|e| RepoError::database("get_character", e))?;
        row.as_ref().map(row_to_character).transpose()
    }

    async fn insert_character(&mut self, c: &Character) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO characters (
                id, user_id, name, class, level, experience, max_exp_needed,
                max_level_reached, strength, intelligence, endurance, available_points,
                version, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(c.id.to_uuid())
        .bind(c.user_id.to_uuid())
        .bind(c.name.as_str())
        .bind(c.class.to_string())
        .bind(i64::from(c.level))
        .bind(to_db_int(c.experience)?)
        .bind(to_db_int(c.max_exp_needed)?)
        .bind(i64::from(c.max_level_reached))
        .bind(i64::from(c.attributes.strength))
        .bind(i64::from(c.attributes.intelligence))
        .bind(i64::from(c.attributes.endurance))
        .bind(i64::from(c.attributes.available_points))
        .bind(to_db_int(c.version)?)
        .bind(c.created_at)
        .bind(c.updated_at)
        .execute(self.conn()?)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::constraint(format!("user {} already has a character", c.user_id))
            }
            other => RepoError::database("insert_character", other),
        })?;
        Ok(())
    }

    async fn update_character(&mut self, c: &Character) -> Result<u64, RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE characters SET
                name = ?, class = ?, level = ?, experience = ?, max_exp_needed = ?,
                max_level_reached = ?, strength = ?, intelligence = ?, endurance = ?,
                available_points = ?, updated_at = ?, version = version + 1
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(c.name.as_str())
        .bind(c.class.to_string())
        .bind(i64::from(c.level))
        .bind(to_db_int(c.experience)?)
        .bind(to_db_int(c.max_exp_needed)?)
        .bind(i64::from(c.max_level_reached))
        .bind(i64::from(c.attributes.strength))
        .bind(i64::from(c.attributes.intelligence))
        .bind(i64::from(c.attributes.endurance))
        .bind(i64::from(c.attributes.available_points))
        .bind(c.updated_at)
        .bind(c.id.to_uuid())
        .bind(to_db_int(c.version)?)
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("update_character", e))?;

        if result.rows_affected() == 0 {
            return Err(self
                .refused_update("characters", "Character", c.id.to_uuid(), c.version)
                .await);
        }
        Ok(c.version + 1)
    }

    async fn get_quest(&mut self, id: QuestId) -> Result<Option<Quest>, RepoError> {
        let row = sqlx::query("SELECT * FROM quests WHERE id = ?")
            .bind(id.to_uuid())
            .fetch_optional(self.conn()?)
            .await
            .map_err(|e| RepoError::database("get_quest", e))?;
        row.as_ref().map(row_to_quest).transpose()
    }

    async fn insert_quest(&mut self, q: &Quest) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO quests (
                id, character_id, title, description, difficulty, status, progress,
                reward, completed_at, failed_at, reason, version, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(q.id.to_uuid())
        .bind(q.character_id.to_uuid())
        .bind(q.title.as_str())
        .bind(&q.description)
        .bind(q.difficulty.to_string())
        .bind(q.status.to_string())
        .bind(i64::from(q.progress))
        .bind(&q.reward)
        .bind(q.completed_at)
        .bind(q.failed_at)
        .bind(q.reason.as_deref())
        .bind(to_db_int(q.version)?)
        .bind(q.created_at)
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("insert_quest", e))?;
        Ok(())
    }

    async fn update_quest(&mut self, q: &Quest) -> Result<u64, RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE quests SET
                title = ?, description = ?, difficulty = ?, status = ?, progress = ?,
                reward = ?, completed_at = ?, failed_at = ?, reason = ?,
                version = version + 1
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(q.title.as_str())
        .bind(&q.description)
        .bind(q.difficulty.to_string())
        .bind(q.status.to_string())
        .bind(i64::from(q.progress))
        .bind(&q.reward)
        .bind(q.completed_at)
        .bind(q.failed_at)
        .bind(q.reason.as_deref())
        .bind(q.id.to_uuid())
        .bind(to_db_int(q.version)?)
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("update_quest", e))?;

        if result.rows_affected() == 0 {
            return Err(self
                .refused_update("quests", "Quest", q.id.to_uuid(), q.version)
                .await);
        }
        Ok(q.version + 1)
    }

    async fn list_items_by_quest(&mut self, quest_id: QuestId) -> Result<Vec<Item>, RepoError> {
        let rows = sqlx::query("SELECT * FROM items WHERE reward_from_quest_id = ? ORDER BY rowid")
            .bind(quest_id.to_uuid())
            .fetch_all(self.conn()?)
            .await
            .map_err(|e| RepoError::database("list_items_by_quest", e))?;
        rows.iter().map(row_to_item).collect()
    }

    async fn find_item_by_name_and_status(
        &mut self,
        character_id: CharacterId,
        name: &ItemName,
        status: ItemStatus,
    ) -> Result<Option<Item>, RepoError> {
        let row = sqlx::query(
            "SELECT * FROM items WHERE character_id = ? AND name = ? AND status = ? ORDER BY rowid LIMIT 1",
        )
        .bind(character_id.to_uuid())
        .bind(name.as_str())
        .bind(status.to_string())
        .fetch_optional(self.conn()?)
        .await
        .map_err(|e| RepoError::database("find_item_by_name_and_status", e))?;
        row.as_ref().map(row_to_item).transpose()
    }

    async fn insert_item(&mut self, item: &Item) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO items (
                id, character_id, name, description, quantity, status, reward_from_quest_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(item.id.to_uuid())
        .bind(item.character_id.to_uuid())
        .bind(item.name.as_str())
        .bind(item.description.as_deref())
        .bind(i64::from(item.quantity.get()))
        .bind(item.status.to_string())
        .bind(item.reward_from_quest_id.map(QuestId::to_uuid))
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("insert_item", e))?;
        Ok(())
    }

    async fn update_item(&mut self, item: &Item) -> Result<(), RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE items SET
                name = ?, description = ?, quantity = ?, status = ?, reward_from_quest_id = ?
            WHERE id = ?
            "#,
        )
        .bind(item.name.as_str())
        .bind(item.description.as_deref())
        .bind(i64::from(item.quantity.get()))
        .bind(item.status.to_string())
        .bind(item.reward_from_quest_id.map(QuestId::to_uuid))
        .bind(item.id.to_uuid())
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("update_item", e))?;
        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Item", item.id));
        }
        Ok(())
    }

    async fn delete_item(&mut self, id: ItemId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id.to_uuid())
            .execute(self.conn()?)
            .await
            .map_err(|e| RepoError::database("delete_item", e))?;
        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Item", id));
        }
        Ok(())
    }

    async fn get_skill(&mut self, id: SkillId) -> Result<Option<Skill>, RepoError> {
        let row = sqlx::query("SELECT * FROM skills WHERE id = ?")
            .bind(id.to_uuid())
            .fetch_optional(self.conn()?)
            .await
            .map_err(|e| RepoError::database("get_skill", e))?;
        row.as_ref().map(row_to_skill).transpose()
    }

    async fn insert_skill(&mut self, skill: &Skill) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO skills (id, character_id, name, description, level, max_level, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(skill.id.to_uuid())
        .bind(skill.character_id.to_uuid())
        .bind(skill.name.as_str())
        .bind(&skill.description)
        .bind(i64::from(skill.level))
        .bind(i64::from(skill.max_level))
        .bind(skill.created_at)
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("insert_skill", e))?;
        Ok(())
    }

    async fn update_skill(&mut self, skill: &Skill) -> Result<(), RepoError> {
        let result = sqlx::query(
            "UPDATE skills SET name = ?, description = ?, level = ?, max_level = ? WHERE id = ?",
        )
        .bind(skill.name.as_str())
        .bind(&skill.description)
        .bind(i64::from(skill.level))
        .bind(i64::from(skill.max_level))
        .bind(skill.id.to_uuid())
        .execute(self.conn()?)
        .await
        .map_err(|e| RepoError::database("update_skill", e))?;
        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Skill", skill.id));
        }
        Ok(())
    }

    async fn delete_skill(&mut self, id: SkillId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id.to_uuid())
            .execute(self.conn()?)
            .await
            .map_err(|e| RepoError::database("delete_skill", e))?;
        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Skill", id));
        }
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), RepoError> {
        let tx = self
            .tx
            .take()
            .ok_or_else(|| RepoError::database("commit", "unit of work already committed"))?;
        tx.commit()
            .await
            .map_err(|e| RepoError::database("commit", e))
    }
}
