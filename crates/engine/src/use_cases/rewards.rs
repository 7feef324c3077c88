//! Reward reconciliation.
//!
//! Moves escrowed reward items between a quest and its character's
//! inventory. Both directions run inside the caller's unit of work, so a
//! failure halfway through the item list leaves nothing behind.

use questbound_domain::{CancelledRewardPolicy, CharacterId, Item, ItemStatus, QuestId};

use crate::infrastructure::ports::UnitOfWork;

use super::error::ProgressionError;

/// What completion reconciliation did to each pending item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewardSummary {
    /// Pending rows folded into an existing stack and deleted.
    pub merged: u32,
    /// Pending rows that became the first stack of their name.
    pub promoted: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct RewardReconciliation {
    cancelled: CancelledRewardPolicy,
}

impl RewardReconciliation {
    pub fn new(cancelled: CancelledRewardPolicy) -> Self {
        Self { cancelled }
    }

    /// Merge a completed quest's pending rewards into the inventory.
    ///
    /// Afterwards `character_id` holds at most one COMPLETED row per item name.
    pub async fn on_complete(
        &self,
        uow: &mut dyn UnitOfWork,
        character_id: CharacterId,
        quest_id: QuestId,
    ) -> Result<RewardSummary, ProgressionError> {
        let pending: Vec<Item> = uow
            .list_items_by_quest(quest_id)
            .await?
            .into_iter()
            .filter(|item| item.status == ItemStatus::Pending)
            .collect();

        let mut summary = RewardSummary::default();
        for mut item in pending {
            let stack = uow
                .find_item_by_name_and_status(character_id, &item.name, ItemStatus::Completed)
                .await?;

            match stack {
                Some(mut stack) => {
                    stack.quantity = stack.quantity.stack(item.quantity)?;
                    uow.update_item(&stack).await?;
                    uow.delete_item(item.id).await?;
                    summary.merged += 1;
                    tracing::debug!(
                        item = %item.name,
                        added = %item.quantity,
                        total = %stack.quantity,
                        "Merged reward into existing stack"
                    );
                }
                None => {
                    item.status = ItemStatus::Completed;
                    uow.update_item(&item).await?;
                    summary.promoted += 1;
                    tracing::debug!(
                        item = %item.name,
                        quantity = %item.quantity,
                        "Reward became a new inventory stack"
                    );
                }
            }
        }

        Ok(summary)
    }

    /// Retire every item escrowed for a cancelled quest. Returns how many rows changed.
    pub async fn on_cancel(
        &self,
        uow: &mut dyn UnitOfWork,
        quest_id: QuestId,
    ) -> Result<u32, ProgressionError> {
        let items = uow.list_items_by_quest(quest_id).await?;

        let mut retired = 0;
        for mut item in items {
            if self.cancelled == CancelledRewardPolicy::DoubleEscrow {
                item.quantity = item.quantity.stack(item.quantity)?;
            }
            item.status = ItemStatus::Failed;
            uow.update_item(&item).await?;
            retired += 1;
            tracing::debug!(
                item = %item.name,
                quantity = %item.quantity,
                policy = %self.cancelled,
                "Escrowed reward retired"
            );
        }

        Ok(retired)
    }
}
