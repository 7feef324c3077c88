//! Visible inventory.

use std::sync::Arc;

use questbound_domain::{CharacterId, Item, ItemStatus};

use crate::infrastructure::ports::ProgressionStore;
use crate::use_cases::error::ProgressionError;

pub struct Inventory {
    store: Arc<dyn ProgressionStore>,
}

impl Inventory {
    pub fn new(store: Arc<dyn ProgressionStore>) -> Self {
        Self { store }
    }

    /// COMPLETED items only. Escrowed and failed rewards never show.
    pub async fn list(&self, character_id: CharacterId) -> Result<Vec<Item>, ProgressionError> {
        Ok(self
            .store
            .list_items(character_id, ItemStatus::Completed)
            .await?)
    }
}
