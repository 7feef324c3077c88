//! Skill use cases.

use std::sync::Arc;

mod create;
mod remove;
mod upgrade;

pub use create::{CreateSkill, CreateSkillInput};
pub use remove::RemoveSkill;
pub use upgrade::{SkillUpgradeOutcome, UpgradeSkill};

/// Container for skill use cases.
pub struct SkillUseCases {
    pub upgrade: Arc<UpgradeSkill>,
    pub remove: Arc<RemoveSkill>,
    pub create: Arc<CreateSkill>,
}

impl SkillUseCases {
    pub fn new(
        upgrade: Arc<UpgradeSkill>,
        remove: Arc<RemoveSkill>,
        create: Arc<CreateSkill>,
    ) -> Self {
        Self {
            upgrade,
            remove,
            create,
        }
    }
}
